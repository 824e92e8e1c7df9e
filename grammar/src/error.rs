//! Grammar error types.

use thiserror::Error;

use crate::Category;

/// Result type for grammar operations.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// Inconsistencies in a grammar table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("category '{category}' has no alternatives but is referenced by {referenced_by}")]
    EmptyCategory {
        category: Category,
        referenced_by: String,
    },

    #[error("alternative '{name}' listed under '{listed}' evaluates as '{evaluates}'")]
    CategoryMismatch {
        name: String,
        listed: Category,
        evaluates: Category,
    },
}

impl GrammarError {
    pub fn empty_category(category: Category, referenced_by: impl Into<String>) -> Self {
        Self::EmptyCategory {
            category,
            referenced_by: referenced_by.into(),
        }
    }

    pub fn category_mismatch(name: impl Into<String>, listed: Category, evaluates: Category) -> Self {
        Self::CategoryMismatch {
            name: name.into(),
            listed,
            evaluates,
        }
    }
}
