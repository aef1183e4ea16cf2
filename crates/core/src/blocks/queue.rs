//! Piece queue - uniform random draws with a lookahead buffer
//!
//! Each upcoming piece is drawn independently and uniformly from the seven
//! kinds (with replacement, no bag). Popping the head appends a fresh draw,
//! so the buffer length never changes.

use std::collections::VecDeque;

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{PieceKind, MIN_NEXT_PIECES};

#[derive(Debug, Clone)]
pub struct PieceQueue<R = SimpleRng> {
    upcoming: VecDeque<PieceKind>,
    len: usize,
    rng: R,
}

impl PieceQueue<SimpleRng> {
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PieceQueue<R> {
    /// Queue with the minimum lookahead of two pieces
    pub fn new(rng: R) -> Self {
        Self::with_len(rng, MIN_NEXT_PIECES)
    }

    /// Queue with `len` pieces of lookahead, raised to the minimum if smaller
    pub fn with_len(rng: R, len: usize) -> Self {
        let mut queue = Self {
            upcoming: VecDeque::new(),
            len: len.max(MIN_NEXT_PIECES),
            rng,
        };
        queue.refill();
        queue
    }

    fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_index(PieceKind::ALL.len())]
    }

    fn refill(&mut self) {
        while self.upcoming.len() < self.len {
            let kind = self.draw();
            self.upcoming.push_back(kind);
        }
    }

    /// Take the head and top the buffer back up
    pub fn pop(&mut self) -> PieceKind {
        let kind = match self.upcoming.pop_front() {
            Some(kind) => kind,
            None => self.draw(),
        };
        self.refill();
        kind
    }

    pub fn peek(&self) -> Option<PieceKind> {
        self.upcoming.front().copied()
    }

    /// Upcoming pieces in spawn order
    pub fn upcoming(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.upcoming.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    /// Discard the buffer and draw a fresh one
    pub fn reset(&mut self) {
        self.upcoming.clear();
        self.refill();
    }
}
