//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while reading grids from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("expected 9 cells, found {found}")]
    CellCount { found: usize },

    #[error("unknown color code '{code}' (expected one of r, y, b)")]
    UnknownColor { code: char },

    #[error("unknown shape code '{code}' (expected one of C, T, S)")]
    UnknownShape { code: char },

    #[error("malformed cell '{token}'")]
    MalformedCell { token: String },
}

impl CoreError {
    pub fn cell_count(found: usize) -> Self {
        Self::CellCount { found }
    }

    pub fn unknown_color(code: char) -> Self {
        Self::UnknownColor { code }
    }

    pub fn unknown_shape(code: char) -> Self {
        Self::UnknownShape { code }
    }

    pub fn malformed_cell(token: impl Into<String>) -> Self {
        Self::MalformedCell {
            token: token.into(),
        }
    }
}
