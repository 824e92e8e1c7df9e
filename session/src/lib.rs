//! Zendo Session
//!
//! One game's worth of state behind a single random source.
//!
//! Responsibilities:
//! - Own the grammar, the sampler configuration and the current rule
//! - Draw new rules on reset
//! - Judge grids and produce labelled examples
//! - Shuffle grids for callers building challenges

mod config;
mod error;
mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::Session;
