//! Adjacency and connectivity over grid cells.

use std::collections::HashSet;

use crate::{column_of, row_of, CELL_COUNT, SIDE};

/// Every structurally adjacent pair of cells: six horizontal, then six vertical.
pub const ADJACENT_PAIRS: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (3, 4),
    (4, 5),
    (6, 7),
    (7, 8),
    (0, 3),
    (3, 6),
    (1, 4),
    (4, 7),
    (2, 5),
    (5, 8),
];

/// The 4-neighbors of a cell (up, down, left, right), skipping grid edges.
pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    let up = (row_of(index) > 0).then(|| index - SIDE);
    let down = (row_of(index) < SIDE - 1).then(|| index + SIDE);
    let left = (column_of(index) > 0).then(|| index - 1);
    let right = (column_of(index) < SIDE - 1).then(|| index + 1);
    [up, down, left, right].into_iter().flatten()
}

/// Returns true if two cells share an edge.
pub fn are_adjacent(a: usize, b: usize) -> bool {
    neighbors(a).any(|n| n == b)
}

/// Returns true if `cells` forms a single 4-connected cluster.
///
/// An empty slice is connected. The fill starts at `cells[0]` and only moves
/// through members of `cells`.
pub fn is_connected(cells: &[usize]) -> bool {
    let Some(&start) = cells.first() else {
        return true;
    };

    // out of range indices can never be reached
    if cells.iter().any(|&i| i >= CELL_COUNT) {
        return false;
    }

    let mut remaining: HashSet<usize> = cells.iter().copied().collect();

    let mut stack = vec![start];
    remaining.remove(&start);
    while let Some(cell) = stack.pop() {
        for next in neighbors(cell) {
            if remaining.remove(&next) {
                stack.push(next);
            }
        }
    }

    remaining.is_empty()
}
