use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_games::core::blocks::{collides, Board, Piece};
use grid_games::core::maze::{find_path, MazeEngine, StageSet};
use grid_games::core::BlockEngine;
use grid_games::types::{BlockAction, PieceKind, Position};

fn bench_maze_tick(c: &mut Criterion) {
    let stages = StageSet::builtin().unwrap();
    let mut maze = MazeEngine::with_seed(stages, 12345);

    c.bench_function("maze_tick", |b| {
        b.iter(|| {
            if !maze.advance() {
                maze.restart();
            }
        })
    });
}

fn bench_find_path(c: &mut Criterion) {
    let stages = StageSet::builtin().unwrap();
    let grid = stages.get(2).unwrap().grid.clone();

    c.bench_function("bfs_across_largest_stage", |b| {
        b.iter(|| find_path(black_box(&grid), Position::new(1, 1), grid.goal()))
    });
}

fn bench_block_tick(c: &mut Criterion) {
    let mut blocks = BlockEngine::with_seed(12345);
    blocks.start();

    c.bench_function("block_tick", |b| {
        b.iter(|| {
            if !blocks.advance() {
                blocks.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&piece), &board, (0, 1)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut blocks = BlockEngine::with_seed(12345);
    blocks.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !blocks.apply_action(BlockAction::HardDrop) {
                blocks.restart();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_maze_tick,
    bench_find_path,
    bench_block_tick,
    bench_line_clear,
    bench_collides,
    bench_hard_drop
);
criterion_main!(benches);
