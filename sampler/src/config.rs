//! Configuration for example sampling

use std::ops::RangeInclusive;

use zendo_core::CELL_COUNT;

/// Draw ceiling used when none is configured.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 500;

/// Symbol counts a random grid is drawn from when none is configured.
pub const DEFAULT_FILL_RANGE: RangeInclusive<usize> = 3..=9;

/// Configuration for grid sampling and example generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Maximum number of grids drawn per `generate_examples` call
    pub attempt_limit: usize,
    /// Range the number of symbols on a random grid is drawn from
    pub fill_range: RangeInclusive<usize>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            fill_range: DEFAULT_FILL_RANGE,
        }
    }
}

impl SamplerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attempt_limit(mut self, limit: usize) -> Self {
        self.attempt_limit = limit;
        self
    }

    pub fn with_fill_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.fill_range = range;
        self
    }

    /// The fill range clamped to `[0, CELL_COUNT]`, never inverted.
    pub fn clamped_fill_range(&self) -> RangeInclusive<usize> {
        clamp_fill_range(&self.fill_range)
    }
}

/// Clamp `range` to `[0, CELL_COUNT]`; an inverted range collapses to its start.
pub fn clamp_fill_range(range: &RangeInclusive<usize>) -> RangeInclusive<usize> {
    let low = (*range.start()).min(CELL_COUNT);
    let high = (*range.end()).min(CELL_COUNT).max(low);
    low..=high
}
