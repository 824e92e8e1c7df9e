//! Zendo CLI
//!
//! Library half of the `zendo` binary: challenge assembly and output
//! formatting, kept out of `main.rs` so they can be tested.

pub mod challenge;
pub mod format;

pub use challenge::{build_challenge, Stage};
