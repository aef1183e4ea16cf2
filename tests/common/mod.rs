#![allow(dead_code)]

use std::sync::Once;

use grid_games::core::maze::{Stage, StageSet, StageSpec};
use grid_games::types::Position;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route engine logs to the test output; filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn stage(rows: &[&[u8]], player: (i32, i32), watchers: &[(i32, i32)]) -> Stage {
    let spec = StageSpec {
        maze: rows.iter().map(|r| r.to_vec()).collect(),
        player_start: Position::new(player.0, player.1),
        watcher_starts: watchers
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect(),
    };
    Stage::from_spec(&spec).expect("valid test stage")
}

pub fn single(rows: &[&[u8]], player: (i32, i32), watchers: &[(i32, i32)]) -> StageSet {
    StageSet::single(stage(rows, player, watchers))
}

/// ```text
/// # # # # # # #
/// # . . . . . #
/// # . # # # . #
/// # . . . . G #
/// # # # # # # #
/// ```
pub const RING: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 2, 1],
    &[1, 1, 1, 1, 1, 1, 1],
];
