//! Session configuration.

use zendo_sampler::SamplerConfig;

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the session's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Grid sampling settings.
    pub sampler: SamplerConfig,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }
}
