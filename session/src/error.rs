//! Session error types.

use thiserror::Error;
use zendo_grammar::GrammarError;
use zendo_rule::RuleError;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The grammar failed validation.
    #[error("grammar error: {0}")]
    GrammarError(#[from] GrammarError),

    /// Rule generation or instantiation failed.
    #[error("rule error: {0}")]
    RuleError(#[from] RuleError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
