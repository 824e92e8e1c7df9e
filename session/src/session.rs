//! Session manager.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;
use zendo_core::Grid;
use zendo_grammar::Grammar;
use zendo_rule::{random_rule, Rule};
use zendo_sampler::{ExampleGenerator, Examples};

use crate::config::SessionConfig;
use crate::error::SessionResult;

/// A Zendo session.
///
/// Every random draw (rules, grids, shuffles) goes through the session's
/// single `StdRng`, so a seeded session replays exactly.
pub struct Session {
    /// The random source.
    rng: StdRng,
    /// The grammar rules are drawn from.
    grammar: Grammar,
    /// Example sampler.
    examples: ExampleGenerator,
    /// The current secret rule.
    rule: Rule,
    /// Number of rules drawn so far.
    round: u64,
}

impl Session {
    /// Create a session over the standard grammar and draw the first rule.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        Self::with_grammar(Grammar::standard(), config)
    }

    /// Create a session over a custom grammar.
    pub fn with_grammar(grammar: Grammar, config: SessionConfig) -> SessionResult<Self> {
        grammar.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let rule = random_rule(&grammar, &mut rng)?;
        info!(round = 1, rule = rule.description(), "new rule");

        Ok(Self {
            rng,
            grammar,
            examples: ExampleGenerator::new(config.sampler),
            rule,
            round: 1,
        })
    }

    /// Replace the current rule with a freshly drawn one.
    pub fn reset(&mut self) -> SessionResult<&Rule> {
        self.rule = random_rule(&self.grammar, &mut self.rng)?;
        self.round += 1;
        info!(round = self.round, rule = self.rule.description(), "new rule");
        Ok(&self.rule)
    }

    /// The current rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The current rule's text.
    pub fn description(&self) -> &str {
        self.rule.description()
    }

    /// Number of rules drawn so far, starting at 1.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Does the grid satisfy the current rule?
    pub fn judge(&self, grid: &Grid) -> bool {
        self.rule.evaluate(grid)
    }

    /// Sample valid and invalid examples for the current rule.
    pub fn generate_examples(&mut self, want_valid: usize, want_invalid: usize) -> Examples {
        self.examples
            .generate(&self.rule, want_valid, want_invalid, &mut self.rng)
    }

    /// A random grid from the configured fill range.
    pub fn random_grid(&mut self) -> Grid {
        self.examples.random_grid(&mut self.rng)
    }

    /// Shuffle grids uniformly in place.
    pub fn shuffle(&mut self, grids: &mut [Grid]) {
        grids.shuffle(&mut self.rng);
    }
}
