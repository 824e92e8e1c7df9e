//! Rule error types.

use thiserror::Error;
use zendo_grammar::Category;

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while generating or instantiating rules.
///
/// All of them point at a grammar table that disagrees with itself or with
/// a skeleton, so callers should propagate rather than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("No eligible alternative for '{category}'")]
    NoEligibleAlternative { category: Category },

    #[error("Alternative {index} of '{category}' not found")]
    MissingAlternative { category: Category, index: usize },

    #[error("Alternative {index} of '{category}' expects children {expected}, found {found}")]
    SlotMismatch {
        category: Category,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Attribute {attribute} out of range for alternative {index} of '{category}' ({choices} choices)")]
    AttributeOutOfRange {
        category: Category,
        index: usize,
        attribute: usize,
        choices: usize,
    },

    #[error("Root fragment is a '{category}', not a rule")]
    NotARule { category: Category },
}

impl RuleError {
    pub fn no_eligible_alternative(category: Category) -> Self {
        Self::NoEligibleAlternative { category }
    }

    pub fn missing_alternative(category: Category, index: usize) -> Self {
        Self::MissingAlternative { category, index }
    }

    pub fn slot_mismatch(
        category: Category,
        index: usize,
        expected: &[Category],
        found: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self::SlotMismatch {
            category,
            index,
            expected: format_slots(expected.iter().copied()),
            found: format_slots(found),
        }
    }

    pub fn attribute_out_of_range(
        category: Category,
        index: usize,
        attribute: usize,
        choices: usize,
    ) -> Self {
        Self::AttributeOutOfRange {
            category,
            index,
            attribute,
            choices,
        }
    }

    pub fn not_a_rule(category: Category) -> Self {
        Self::NotARule { category }
    }
}

fn format_slots(slots: impl IntoIterator<Item = Category>) -> String {
    let names: Vec<&str> = slots.into_iter().map(Category::as_str).collect();
    format!("[{}]", names.join(", "))
}
