//! Watcher AI - per-agent search/chase state machine
//!
//! Each tick a watcher first checks whether it and the player are facing each
//! other. If so it switches to chasing and remembers the player's cell. A
//! chasing watcher follows the BFS path toward that cell and falls back to
//! searching once the target is reached or unreachable. A searching watcher
//! wanders, never turning straight back unless it is in a dead end.

use arrayvec::ArrayVec;
use serde::Serialize;

use super::grid::Grid;
use super::path::find_path;
use crate::rng::RandomSource;
use crate::types::{Direction, Position, WatcherMode};

/// The player agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub pos: Position,
    pub direction: Direction,
}

impl Player {
    /// Players start each stage facing right
    pub fn spawn(pos: Position) -> Self {
        Self {
            pos,
            direction: Direction::Right,
        }
    }

    /// Cell directly in front of the player
    pub fn ahead(&self) -> Position {
        self.pos.step(self.direction)
    }
}

/// A watcher agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Watcher {
    pub pos: Position,
    pub direction: Direction,
    pub mode: WatcherMode,
    pub target: Option<Position>,
}

impl Watcher {
    /// Watchers start each stage facing up, searching
    pub fn spawn(pos: Position) -> Self {
        Self {
            pos,
            direction: Direction::Up,
            mode: WatcherMode::Searching,
            target: None,
        }
    }

    /// Run one tick of behavior. Returns true when the mode changed.
    pub fn advance<R: RandomSource>(&mut self, grid: &Grid, player: &Player, rng: &mut R) -> bool {
        let before = self.mode;

        if facing_each_other(self, player) {
            self.mode = WatcherMode::Chasing;
            self.target = Some(player.pos);
        }

        match (self.mode, self.target) {
            (WatcherMode::Chasing, Some(target)) => self.chase(grid, target),
            _ => self.search(grid, rng),
        }

        self.mode != before
    }

    fn chase(&mut self, grid: &Grid, target: Position) {
        let path = find_path(grid, self.pos, target);
        match path.get(1) {
            Some(&next) => {
                if let Some(dir) = Direction::from_delta(next.x - self.pos.x, next.y - self.pos.y) {
                    self.direction = dir;
                }
                self.pos = next;
            }
            None => {
                // Reached the target or lost it.
                self.mode = WatcherMode::Searching;
                self.target = None;
            }
        }
    }

    fn search<R: RandomSource>(&mut self, grid: &Grid, rng: &mut R) {
        let options = open_directions(grid, self.pos, self.direction);
        if options.is_empty() {
            self.direction = self.direction.reverse();
            return;
        }
        let dir = options[rng.next_index(options.len())];
        self.direction = dir;
        self.pos = self.pos.step(dir);
    }
}

/// Directions leading to an open cell, minus the one straight behind `facing`
pub fn open_directions(grid: &Grid, pos: Position, facing: Direction) -> ArrayVec<Direction, 4> {
    let behind = facing.reverse();
    Direction::ALL
        .into_iter()
        .filter(|&dir| dir != behind && grid.is_passable(pos.step(dir)))
        .collect()
}

/// True when watcher and player share a row or column, occupy different cells,
/// and each faces straight at the other. Walls in between are not considered.
pub fn facing_each_other(watcher: &Watcher, player: &Player) -> bool {
    let dx = player.pos.x - watcher.pos.x;
    let dy = player.pos.y - watcher.pos.y;

    let toward_player = match (dx.signum(), dy.signum()) {
        (0, -1) => Direction::Up,
        (0, 1) => Direction::Down,
        (-1, 0) => Direction::Left,
        (1, 0) => Direction::Right,
        // Same cell, or not aligned on a row or column.
        _ => return false,
    };

    watcher.direction == toward_player && player.direction == toward_player.reverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    fn grid(rows: &[&[u8]]) -> Grid {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    fn watcher_at(x: i32, y: i32, direction: Direction) -> Watcher {
        Watcher {
            direction,
            ..Watcher::spawn(Position::new(x, y))
        }
    }

    fn player_at(x: i32, y: i32, direction: Direction) -> Player {
        Player {
            pos: Position::new(x, y),
            direction,
        }
    }

    #[test]
    fn test_facing_all_four_cases() {
        // Watcher faces up, player above facing down.
        assert!(facing_each_other(
            &watcher_at(2, 4, Direction::Up),
            &player_at(2, 1, Direction::Down)
        ));
        // Watcher faces down, player below facing up.
        assert!(facing_each_other(
            &watcher_at(2, 1, Direction::Down),
            &player_at(2, 3, Direction::Up)
        ));
        // Watcher faces left, player to the left facing right.
        assert!(facing_each_other(
            &watcher_at(5, 1, Direction::Left),
            &player_at(1, 1, Direction::Right)
        ));
        // Watcher faces right, player to the right facing left (adjacent).
        assert!(facing_each_other(
            &watcher_at(1, 1, Direction::Right),
            &player_at(2, 1, Direction::Left)
        ));
    }

    #[test]
    fn test_not_facing() {
        // Only one of them looks at the other.
        assert!(!facing_each_other(
            &watcher_at(5, 1, Direction::Left),
            &player_at(1, 1, Direction::Up)
        ));
        // Back to back.
        assert!(!facing_each_other(
            &watcher_at(5, 1, Direction::Right),
            &player_at(1, 1, Direction::Left)
        ));
        // Diagonal.
        assert!(!facing_each_other(
            &watcher_at(2, 2, Direction::Left),
            &player_at(1, 1, Direction::Right)
        ));
        // Same cell.
        assert!(!facing_each_other(
            &watcher_at(1, 1, Direction::Left),
            &player_at(1, 1, Direction::Right)
        ));
    }

    #[test]
    fn test_facing_switches_to_chase_and_steps_toward_player() {
        let g = grid(&[&[0, 0, 0, 0, 2]]);
        let player = player_at(0, 0, Direction::Right);
        let mut w = watcher_at(4, 0, Direction::Left);
        let mut rng = ScriptedRandom::first();

        assert!(w.advance(&g, &player, &mut rng));
        assert_eq!(w.mode, WatcherMode::Chasing);
        assert_eq!(w.target, Some(Position::new(0, 0)));
        assert_eq!(w.pos, Position::new(3, 0));
        assert_eq!(w.direction, Direction::Left);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_chase_follows_remembered_target_then_reverts() {
        let g = grid(&[&[0, 0, 2]]);
        // Player has since walked away; the watcher keeps the remembered cell.
        let player = player_at(2, 0, Direction::Right);
        let mut w = Watcher {
            mode: WatcherMode::Chasing,
            target: Some(Position::new(0, 0)),
            ..watcher_at(1, 0, Direction::Left)
        };
        let mut rng = ScriptedRandom::first();

        assert!(!w.advance(&g, &player, &mut rng));
        assert_eq!(w.pos, Position::new(0, 0));

        // Target reached: back to searching, no movement this tick.
        assert!(w.advance(&g, &player, &mut rng));
        assert_eq!(w.mode, WatcherMode::Searching);
        assert_eq!(w.target, None);
        assert_eq!(w.pos, Position::new(0, 0));
    }

    #[test]
    fn test_chase_unreachable_target_reverts() {
        let g = grid(&[&[0, 1, 0, 2]]);
        let player = player_at(3, 0, Direction::Up);
        let mut w = Watcher {
            mode: WatcherMode::Chasing,
            target: Some(Position::new(2, 0)),
            ..watcher_at(0, 0, Direction::Right)
        };
        let mut rng = ScriptedRandom::first();

        assert!(w.advance(&g, &player, &mut rng));
        assert_eq!(w.mode, WatcherMode::Searching);
        assert_eq!(w.pos, Position::new(0, 0));
    }

    #[test]
    fn test_search_excludes_reverse() {
        let g = grid(&[
            &[1, 0, 1],
            &[0, 0, 0],
            &[1, 0, 2],
        ]);
        let options = open_directions(&g, Position::new(1, 1), Direction::Up);
        assert_eq!(
            options.as_slice(),
            &[Direction::Up, Direction::Right, Direction::Left]
        );
    }

    #[test]
    fn test_search_picks_scripted_option() {
        let g = grid(&[
            &[1, 0, 1],
            &[0, 0, 0],
            &[1, 0, 2],
        ]);
        let player = player_at(0, 1, Direction::Up);
        let mut w = watcher_at(1, 1, Direction::Up);
        let mut rng = ScriptedRandom::new(vec![1]);

        assert!(!w.advance(&g, &player, &mut rng));
        assert_eq!(w.direction, Direction::Right);
        assert_eq!(w.pos, Position::new(2, 1));
    }

    #[test]
    fn test_dead_end_turns_around_in_place() {
        let g = grid(&[
            &[1, 1, 1],
            &[1, 0, 1],
            &[1, 0, 2],
        ]);
        let player = player_at(2, 2, Direction::Up);
        let mut w = watcher_at(1, 1, Direction::Up);
        let mut rng = ScriptedRandom::first();

        w.advance(&g, &player, &mut rng);
        assert_eq!(w.pos, Position::new(1, 1));
        assert_eq!(w.direction, Direction::Down);
        assert_eq!(rng.consumed(), 0);

        // Facing down now, the corridor is open.
        w.advance(&g, &player, &mut rng);
        assert_eq!(w.pos, Position::new(1, 2));
    }
}
