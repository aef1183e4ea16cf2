//! Block engine - single authoritative state for the stacking game
//!
//! Piece lifecycle: spawn → falling (moved, rotated, held) → locked →
//! cleared and scored → next spawn. A spawn that immediately collides ends
//! the game; only `restart` leaves that state.

use std::time::Duration;

use tracing::{debug, trace};

use super::board::Board;
use super::collision::collides;
use super::piece::Piece;
use super::queue::PieceQueue;
use super::scoring::{drop_interval_ms, next_level, score_lock};
use super::snapshot::{ActiveSnapshot, BlockSnapshot};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{BlockAction, PieceKind, BONUS_DISPLAY_MS, MIN_NEXT_PIECES};

/// Notable transitions, drained by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    Spawned(PieceKind),
    Held(PieceKind),
    Locked { kind: PieceKind, lines: u32 },
    /// Four lines in one lock; the bonus banner is showing
    Bonus { points: u32 },
    LevelUp { level: u32 },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct BlockEngine<R = SimpleRng> {
    board: Board,
    current: Option<Piece>,
    held: Option<Piece>,
    queue: PieceQueue<R>,
    can_hold: bool,
    started: bool,
    game_over: bool,
    score: u32,
    level: u32,
    lines: u32,
    /// Remaining display time of the four-line bonus banner
    bonus_ms: u32,
    events: Vec<BlockEvent>,
}

impl BlockEngine<SimpleRng> {
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> BlockEngine<R> {
    /// New, not yet started game with the minimum lookahead
    pub fn new(rng: R) -> Self {
        Self::with_queue_len(rng, MIN_NEXT_PIECES)
    }

    pub fn with_queue_len(rng: R, next_len: usize) -> Self {
        Self {
            board: Board::new(),
            current: None,
            held: None,
            queue: PieceQueue::with_len(rng, next_len),
            can_hold: true,
            started: false,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
            bonus_ms: 0,
            events: Vec::new(),
        }
    }

    /// Spawn the first piece. Does nothing once started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn show_bonus(&self) -> bool {
        self.bonus_ms > 0
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    pub fn next_pieces(&self) -> Vec<PieceKind> {
        self.queue.upcoming().collect()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for scenario setup in tests
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the falling piece, for scenario setup in tests
    #[doc(hidden)]
    pub fn set_current(&mut self, piece: Piece) {
        self.current = Some(piece);
    }

    fn is_active(&self) -> bool {
        self.started && !self.game_over
    }

    /// Current gravity period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(drop_interval_ms(self.level)))
    }

    fn spawn_next(&mut self) {
        let kind = self.queue.pop();
        let piece = Piece::spawn(kind);
        self.current = Some(piece);
        self.can_hold = true;

        if collides(&piece, &self.board, (0, 0)) {
            debug!(?kind, score = self.score, "spawn blocked, game over");
            self.game_over = true;
            self.events.push(BlockEvent::GameOver);
            return;
        }
        trace!(?kind, "spawned");
        self.events.push(BlockEvent::Spawned(kind));
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        if collides(&piece, &self.board, (dx, dy)) {
            return false;
        }
        self.current = Some(piece.moved(dx, dy));
        true
    }

    /// Shift one column left (`-1`) or right (`1`) when the target is free
    pub fn move_horizontally(&mut self, dx: i8) -> bool {
        if !self.is_active() || !matches!(dx, -1 | 1) {
            return false;
        }
        self.try_move(dx, 0)
    }

    /// Rotate clockwise in place. No kicks: refused if the result collides.
    pub fn rotate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };
        let rotated = piece.rotated();
        if collides(&rotated, &self.board, (0, 0)) {
            return false;
        }
        self.current = Some(rotated);
        true
    }

    /// Swap the falling piece with the held one, or stash it and spawn.
    ///
    /// Allowed once per spawn.
    pub fn hold(&mut self) -> bool {
        if !self.is_active() || !self.can_hold {
            return false;
        }
        let Some(piece) = self.current.take() else {
            return false;
        };

        debug!(kind = ?piece.kind, "hold");
        self.events.push(BlockEvent::Held(piece.kind));
        match self.held.replace(piece) {
            Some(previous) => {
                let swapped = previous.recentered();
                self.current = Some(swapped);
                if collides(&swapped, &self.board, (0, 0)) {
                    debug!(kind = ?swapped.kind, "held piece blocked, game over");
                    self.game_over = true;
                    self.events.push(BlockEvent::GameOver);
                }
            }
            None => self.spawn_next(),
        }
        self.can_hold = false;
        true
    }

    /// Row the current piece would land on if dropped straight down
    pub fn drop_position(&self) -> Option<i8> {
        let piece = self.current?;
        let mut distance: i8 = 0;
        while !collides(&piece, &self.board, (0, distance + 1)) {
            distance += 1;
        }
        Some(piece.y + distance)
    }

    /// One gravity step: fall a row, or lock when resting
    fn step_down(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_current();
        }
        true
    }

    pub fn soft_drop(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.step_down()
    }

    /// Drop to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let (Some(piece), Some(y)) = (self.current, self.drop_position()) else {
            return false;
        };
        self.current = Some(Piece { y, ..piece });
        self.lock_current();
        true
    }

    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.lock_piece(&piece);
        let cleared = self.board.clear_full_rows();
        let lines = cleared.len();
        self.events.push(BlockEvent::Locked {
            kind: piece.kind,
            lines: lines as u32,
        });

        if lines > 0 {
            let result = score_lock(lines, self.level);
            self.score = self.score.saturating_add(result.total);
            self.lines += lines as u32;
            debug!(lines, points = result.total, score = self.score, "lines cleared");

            if result.is_tetris {
                self.bonus_ms = BONUS_DISPLAY_MS;
                self.events.push(BlockEvent::Bonus {
                    points: result.bonus,
                });
            }
        }

        let level = next_level(self.score, self.level);
        if level != self.level {
            self.level = level;
            debug!(level, "level up");
            self.events.push(BlockEvent::LevelUp { level });
        }

        self.spawn_next();
    }

    /// One gravity tick. Also runs down the bonus banner timer.
    pub fn advance(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        if self.bonus_ms > 0 {
            self.bonus_ms = self.bonus_ms.saturating_sub(drop_interval_ms(self.level));
        }
        trace!(level = self.level, "block tick");
        self.step_down()
    }

    /// Empty board, fresh queue, score 0, level 1, first piece spawned
    pub fn restart(&mut self) {
        self.board.clear();
        self.queue.reset();
        self.current = None;
        self.held = None;
        self.can_hold = true;
        self.game_over = false;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.bonus_ms = 0;
        self.events.clear();
        self.started = true;
        debug!("block game restarted");
        self.spawn_next();
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: BlockAction) -> bool {
        match action {
            BlockAction::MoveLeft => self.move_horizontally(-1),
            BlockAction::MoveRight => self.move_horizontally(1),
            BlockAction::SoftDrop => self.soft_drop(),
            BlockAction::HardDrop => self.hard_drop(),
            BlockAction::Rotate => self.rotate(),
            BlockAction::Hold => self.hold(),
            BlockAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Take and clear the queued events.
    pub fn take_events(&mut self) -> Vec<BlockEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> BlockSnapshot {
        let mut board = BlockSnapshot::empty_board();
        for (dst, src) in board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(&src);
        }
        BlockSnapshot {
            board,
            current: self.current.map(ActiveSnapshot::from),
            ghost_y: self.drop_position(),
            held: self.held.map(|p| p.kind),
            next: self.next_pieces(),
            can_hold: self.can_hold,
            game_over: self.game_over,
            score: self.score,
            level: self.level,
            lines: self.lines,
            show_bonus: self.show_bonus(),
        }
    }
}
