//! Zendo Core Types
//!
//! This crate provides the foundational types used throughout the Zendo engine:
//! - Symbol attributes (Color, Shape) and the Symbol value type
//! - The 3x3 Grid and its cell indexing
//! - Adjacency and connectivity helpers over grid cells
//! - Grid text rendering and parsing
//! - Common error types

mod connectivity;
mod error;
mod grid;
mod symbol;

pub use connectivity::*;
pub use error::*;
pub use grid::*;
pub use symbol::*;
