//! Example generation by rejection sampling

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zendo_core::Grid;
use zendo_rule::Rule;

use crate::config::SamplerConfig;
use crate::grid::random_grid_in;

/// Grids classified against a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Examples {
    /// Grids satisfying the rule, in discovery order
    pub valid: Vec<Grid>,
    /// Grids violating the rule, in discovery order
    pub invalid: Vec<Grid>,
    /// Number of grids drawn
    pub attempts: usize,
}

impl Examples {
    /// Valid grids followed by invalid grids.
    pub fn into_grids(self) -> Vec<Grid> {
        let mut grids = self.valid;
        grids.extend(self.invalid);
        grids
    }

    /// Returns true if both buckets reached the requested sizes.
    pub fn is_complete(&self, want_valid: usize, want_invalid: usize) -> bool {
        self.valid.len() >= want_valid && self.invalid.len() >= want_invalid
    }

    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// Draws random grids and sorts them by a rule's verdict
pub struct ExampleGenerator {
    config: SamplerConfig,
}

impl ExampleGenerator {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// A random grid drawn with this generator's fill range.
    pub fn random_grid(&self, rng: &mut impl Rng) -> Grid {
        random_grid_in(&self.config.clamped_fill_range(), rng)
    }

    /// Collect up to `want_valid` satisfying and `want_invalid` violating grids.
    ///
    /// Stops when both buckets are full or after `attempt_limit` draws. Grids
    /// landing in an already full bucket are dropped. A shortfall is logged,
    /// not returned as an error.
    pub fn generate(
        &self,
        rule: &Rule,
        want_valid: usize,
        want_invalid: usize,
        rng: &mut impl Rng,
    ) -> Examples {
        let fill_range = self.config.clamped_fill_range();
        let mut examples = Examples::default();

        while !examples.is_complete(want_valid, want_invalid)
            && examples.attempts < self.config.attempt_limit
        {
            let grid = random_grid_in(&fill_range, rng);
            examples.attempts += 1;

            if rule.evaluate(&grid) {
                if examples.valid.len() < want_valid {
                    examples.valid.push(grid);
                }
            } else if examples.invalid.len() < want_invalid {
                examples.invalid.push(grid);
            }
        }

        if examples.is_complete(want_valid, want_invalid) {
            debug!(
                rule = rule.description(),
                attempts = examples.attempts,
                "generated examples"
            );
        } else {
            warn!(
                rule = rule.description(),
                valid = examples.valid.len(),
                want_valid,
                invalid = examples.invalid.len(),
                want_invalid,
                attempts = examples.attempts,
                "failed to generate enough examples"
            );
        }

        examples
    }
}

impl Default for ExampleGenerator {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

/// [`ExampleGenerator::generate`] with the default configuration.
pub fn generate_examples(
    rule: &Rule,
    want_valid: usize,
    want_invalid: usize,
    rng: &mut impl Rng,
) -> Examples {
    ExampleGenerator::default().generate(rule, want_valid, want_invalid, rng)
}
