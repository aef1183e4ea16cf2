//! Maze engine - single authoritative state for the pursuit game
//!
//! All mutation goes through the command methods (`move_player`, `place_mine`,
//! `advance`, `restart`). Invalid commands are absorbed as no-ops and report
//! `false`. After every state change the engine resolves collisions in a fixed
//! order: watcher catches player, player steps on a mine, player reaches the
//! goal, watchers step on mines.

use std::time::Duration;

use tracing::{debug, trace};

use super::grid::Grid;
use super::snapshot::MazeSnapshot;
use super::stage::{Stage, StageSet};
use super::watcher::{Player, Watcher};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::*;

/// Notable transitions, drained by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    /// A watcher switched between searching and chasing
    WatcherMode { index: usize, mode: WatcherMode },
    MinePlaced(Position),
    /// A watcher and the mine under it were both removed
    WatcherNeutralized(Position),
    StageAdvanced { stage: usize },
    Caught,
    MineTriggered(Position),
    Cleared,
}

/// Complete maze game state
#[derive(Debug, Clone)]
pub struct MazeEngine<R = SimpleRng> {
    stages: StageSet,
    stage_index: usize,
    /// Grid of the current stage
    grid: Grid,
    player: Player,
    watchers: Vec<Watcher>,
    mines: Vec<Position>,
    status: GameStatus,
    score: u32,
    tick_count: u64,
    tick_interval: Duration,
    events: Vec<MazeEvent>,
    rng: R,
}

impl MazeEngine<SimpleRng> {
    /// Create an engine with a seeded deterministic RNG
    pub fn with_seed(stages: StageSet, seed: u32) -> Self {
        Self::new(stages, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> MazeEngine<R> {
    /// Create a new game positioned at the first stage
    pub fn new(stages: StageSet, rng: R) -> Self {
        let first = stages.first().clone();
        let mut engine = Self {
            stages,
            stage_index: 0,
            grid: first.grid.clone(),
            player: Player::spawn(first.player_start),
            watchers: Vec::new(),
            mines: Vec::new(),
            status: GameStatus::Playing,
            score: 0,
            tick_count: 0,
            tick_interval: Duration::from_millis(u64::from(MAZE_TICK_MS)),
            events: Vec::new(),
            rng,
        };
        engine.enter_stage(0, &first);
        engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn watchers(&self) -> &[Watcher] {
        &self.watchers
    }

    pub fn mines(&self) -> &[Position] {
        &self.mines
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Period at which the driver should call [`advance`](Self::advance)
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Reset grid, player, watchers and mines to the start of `stage`. Score is kept.
    fn enter_stage(&mut self, index: usize, stage: &Stage) {
        self.stage_index = index;
        self.grid = stage.grid.clone();
        self.player = Player::spawn(stage.player_start);
        self.watchers = stage.watcher_starts.iter().copied().map(Watcher::spawn).collect();
        self.mines.clear();
    }

    fn load_stage(&mut self, index: usize) {
        if let Some(stage) = self.stages.get(index).cloned() {
            self.enter_stage(index, &stage);
        }
    }

    /// Move the player by a unit vector.
    ///
    /// Facing always follows the input, even when the move is blocked by a wall.
    /// A blocked move only reports a change when it turned the player.
    /// A committed move scores +10 when it strictly reduces the Manhattan distance
    /// to the goal and -5 (floored at 0) when it strictly increases it.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(direction) = Direction::from_delta(dx, dy) else {
            return false;
        };

        let previous = std::mem::replace(&mut self.player.direction, direction);
        let target = self.player.pos.step(direction);
        if self.grid.is_wall(target) {
            return direction != previous;
        }

        let before = self.grid.distance_to_goal(self.player.pos);
        let after = self.grid.distance_to_goal(target);
        if after < before {
            self.score += CLOSER_POINTS;
        } else if after > before {
            self.score = self.score.saturating_sub(AWAY_PENALTY);
        }
        self.player.pos = target;

        self.resolve();
        true
    }

    /// Drop a mine on the cell in front of the player.
    ///
    /// Refused when that cell is a wall or already mined.
    pub fn place_mine(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let cell = self.player.ahead();
        if self.grid.is_wall(cell) || self.mines.contains(&cell) {
            return false;
        }

        self.mines.push(cell);
        self.events.push(MazeEvent::MinePlaced(cell));
        trace!(?cell, "mine placed");

        self.resolve();
        true
    }

    /// One fixed-period tick: move every watcher, then resolve collisions.
    pub fn advance(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.tick_count += 1;

        let player = self.player;
        for (index, watcher) in self.watchers.iter_mut().enumerate() {
            if watcher.advance(&self.grid, &player, &mut self.rng) {
                debug!(index, mode = ?watcher.mode, "watcher mode changed");
                self.events.push(MazeEvent::WatcherMode {
                    index,
                    mode: watcher.mode,
                });
            }
        }
        trace!(tick = self.tick_count, "maze tick");

        self.resolve();
        true
    }

    fn resolve(&mut self) {
        let pos = self.player.pos;

        if self.watchers.iter().any(|w| w.pos == pos) {
            debug!(?pos, "player caught");
            self.status = GameStatus::GameOver;
            self.events.push(MazeEvent::Caught);
            return;
        }

        if let Some(i) = self.mines.iter().position(|&m| m == pos) {
            self.mines.swap_remove(i);
            debug!(?pos, "player stepped on a mine");
            self.status = GameStatus::GameOver;
            self.events.push(MazeEvent::MineTriggered(pos));
            return;
        }

        if self.grid.is_goal(pos) {
            if self.stages.is_final(self.stage_index) {
                debug!(score = self.score, "final stage cleared");
                self.status = GameStatus::Clear;
                self.events.push(MazeEvent::Cleared);
            } else {
                let next = self.stage_index + 1;
                debug!(stage = next, score = self.score, "advancing to next stage");
                self.load_stage(next);
                self.events.push(MazeEvent::StageAdvanced { stage: next });
            }
            return;
        }

        self.neutralize_watchers();
    }

    /// Remove every watcher standing on a mine, together with that mine.
    fn neutralize_watchers(&mut self) {
        if self.mines.is_empty() {
            return;
        }

        let mut triggered: Vec<Position> = Vec::new();
        let mines = &self.mines;
        self.watchers.retain(|w| {
            if mines.contains(&w.pos) {
                triggered.push(w.pos);
                false
            } else {
                true
            }
        });

        for pos in triggered {
            self.score += NEUTRALIZE_POINTS;
            self.mines.retain(|&m| m != pos);
            debug!(?pos, score = self.score, "watcher neutralized");
            self.events.push(MazeEvent::WatcherNeutralized(pos));
        }
    }

    /// Back to stage 0 with a fresh score.
    pub fn restart(&mut self) {
        self.load_stage(0);
        self.status = GameStatus::Playing;
        self.score = 0;
        self.tick_count = 0;
        self.events.clear();
        debug!("maze restarted");
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: MazeAction) -> bool {
        match action {
            MazeAction::Move(dir) => {
                let (dx, dy) = dir.delta();
                self.move_player(dx, dy)
            }
            MazeAction::PlaceMine => self.place_mine(),
            MazeAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Take and clear the queued events.
    pub fn take_events(&mut self) -> Vec<MazeEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.to_rows(),
            goal: self.grid.goal(),
            player: self.player,
            watchers: self.watchers.clone(),
            mines: self.mines.clone(),
            status: self.status,
            score: self.score,
            stage: self.stage_index,
            stage_count: self.stages.len(),
            tick: self.tick_count,
        }
    }

    /// Replace the watcher set, for scenario setup in tests
    #[doc(hidden)]
    pub fn set_watchers(&mut self, watchers: Vec<Watcher>) {
        self.watchers = watchers;
    }

    /// Move the player without scoring or collision checks, for scenario setup in tests
    #[doc(hidden)]
    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }
}
