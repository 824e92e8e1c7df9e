//! Random grid generation

use std::ops::RangeInclusive;

use rand::Rng;
use zendo_core::{Color, Grid, Shape, Symbol, CELL_COUNT};

use crate::config::{clamp_fill_range, DEFAULT_FILL_RANGE};

/// A random grid with between 3 and 9 symbols.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    random_grid_in(&DEFAULT_FILL_RANGE, rng)
}

/// A random grid whose symbol count is drawn uniformly from `fill_range`.
///
/// The range is clamped to `[0, CELL_COUNT]` first, so an inverted range
/// yields grids with exactly its clamped start.
pub fn random_grid_in<R: Rng + ?Sized>(fill_range: &RangeInclusive<usize>, rng: &mut R) -> Grid {
    let target = rng.gen_range(clamp_fill_range(fill_range));
    fill_grid(target, rng)
}

/// A grid with exactly `target` symbols (capped at `CELL_COUNT`).
///
/// Selection sampling: cell `i` is filled with probability
/// `remaining / (CELL_COUNT - i)`, so every `target`-subset of cells is
/// equally likely.
pub fn fill_grid<R: Rng + ?Sized>(target: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    let mut remaining = target.min(CELL_COUNT);

    for index in 0..CELL_COUNT {
        if remaining == 0 {
            break;
        }
        if rng.gen_range(0..CELL_COUNT - index) < remaining {
            grid.set(index, random_symbol(rng));
            remaining -= 1;
        }
    }

    grid
}

fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> Symbol {
    let color = Color::ALL[rng.gen_range(0..Color::ALL.len())];
    let shape = Shape::ALL[rng.gen_range(0..Shape::ALL.len())];
    Symbol::new(color, shape)
}
