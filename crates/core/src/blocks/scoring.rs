//! Scoring module - line-clear points, the four-line bonus and leveling
//!
//! Everything scales linearly with the level (1-based):
//! - each cleared line is worth `100 × level`
//! - clearing four lines at once adds a `1000 × level` bonus
//! - the level rises by one when the score passes `level × 1000`, at most once per lock
//!
//! Gravity speeds up by 50ms per level from 1000ms, never below 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, FOUR_LINE_BONUS, LEVEL_SCORE_STEP,
    LINE_POINTS,
};

/// Points for one lock event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockScore {
    pub line_points: u32,
    pub bonus: u32,
    pub total: u32,
    /// Four lines at once
    pub is_tetris: bool,
}

pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    (lines as u32).saturating_mul(LINE_POINTS).saturating_mul(level)
}

pub fn tetris_bonus(lines: usize, level: u32) -> u32 {
    if lines == 4 {
        FOUR_LINE_BONUS.saturating_mul(level)
    } else {
        0
    }
}

pub fn score_lock(lines: usize, level: u32) -> LockScore {
    let line_points = line_clear_score(lines, level);
    let bonus = tetris_bonus(lines, level);
    LockScore {
        line_points,
        bonus,
        total: line_points.saturating_add(bonus),
        is_tetris: lines == 4,
    }
}

/// Level after a lock: one step up when `score > level × 1000`
pub fn next_level(score: u32, level: u32) -> u32 {
    if score > level.saturating_mul(LEVEL_SCORE_STEP) {
        level + 1
    } else {
        level
    }
}

/// Gravity period in milliseconds
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 3), 600);
        assert_eq!(line_clear_score(4, 2), 800);
    }

    #[test]
    fn test_tetris_bonus_only_for_four() {
        assert_eq!(tetris_bonus(3, 5), 0);
        assert_eq!(tetris_bonus(4, 1), 1000);
        assert_eq!(tetris_bonus(4, 3), 3000);
    }

    #[test]
    fn test_score_lock_four_lines() {
        let result = score_lock(4, 2);
        assert_eq!(result.line_points, 800);
        assert_eq!(result.bonus, 2000);
        assert_eq!(result.total, 2800);
        assert!(result.is_tetris);
        assert_eq!(score_lock(0, 9), LockScore::default());
    }

    #[test]
    fn test_next_level_strictly_greater() {
        assert_eq!(next_level(1000, 1), 1);
        assert_eq!(next_level(1001, 1), 2);
        // crossing several thresholds still moves one step
        assert_eq!(next_level(5000, 1), 2);
        assert_eq!(next_level(0, 1), 1);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 950);
        assert_eq!(drop_interval_ms(10), 550);
        assert_eq!(drop_interval_ms(19), 100);
        assert_eq!(drop_interval_ms(40), 100);
        assert_eq!(drop_interval_ms(0), 1000);
    }
}
