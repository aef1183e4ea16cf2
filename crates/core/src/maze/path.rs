//! Breadth-first shortest paths over the maze grid.
//!
//! Neighbors are expanded in the fixed order up, right, down, left, so the
//! returned path is reproducible for a given grid.

use std::collections::VecDeque;

use super::grid::Grid;
use crate::types::{Direction, Position};

/// Shortest 4-connected path from `start` to `goal`, both endpoints included.
///
/// Walls and out-of-bounds cells are impassable. Returns an empty vector when
/// `goal` cannot be reached, and `[start]` when `start == goal`.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Vec<Position> {
    let (Some(start_idx), Some(goal_idx)) = (grid.cell_index(start), grid.cell_index(goal)) else {
        return Vec::new();
    };
    if start_idx == goal_idx {
        return vec![start];
    }
    if grid.is_wall(goal) {
        return Vec::new();
    }

    let cell_count = grid.width() * grid.height();
    let mut came_from: Vec<Option<usize>> = vec![None; cell_count];
    let mut visited = vec![false; cell_count];
    let mut queue = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for dir in Direction::ALL {
            let next = current.step(dir);
            let Some(next_idx) = grid.cell_index(next) else {
                continue;
            };
            if visited[next_idx] || grid.is_wall(next) {
                continue;
            }
            visited[next_idx] = true;
            came_from[next_idx] = grid.cell_index(current);

            if next_idx == goal_idx {
                return reconstruct_path(grid, &came_from, goal_idx);
            }
            queue.push_back(next);
        }
    }

    Vec::new()
}

fn reconstruct_path(grid: &Grid, came_from: &[Option<usize>], goal_idx: usize) -> Vec<Position> {
    let mut path = vec![grid.position_of(goal_idx)];
    let mut current = goal_idx;
    while let Some(prev) = came_from[current] {
        path.push(grid.position_of(prev));
        current = prev;
    }
    path.reverse();
    path
}
