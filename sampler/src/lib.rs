//! Zendo Sampler
//!
//! Random grids and labelled example sets for a rule:
//! - Uniform selection sampling of grids with a given symbol count
//! - Rejection sampling of valid and invalid examples with a draw ceiling

pub mod config;
pub mod examples;
pub mod grid;

pub use config::{clamp_fill_range, SamplerConfig, DEFAULT_ATTEMPT_LIMIT, DEFAULT_FILL_RANGE};
pub use examples::{generate_examples, ExampleGenerator, Examples};
pub use grid::{fill_grid, random_grid, random_grid_in};
