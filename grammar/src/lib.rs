//! Zendo Grammar
//!
//! The static catalogue of rule fragments.
//!
//! Responsibilities:
//! - Name the five fragment categories
//! - Describe each weighted alternative: child slots, attribute choices,
//!   exclusion tags, description templates and evaluation kind
//! - Provide the standard hand-authored table
//! - Check the table for closure

mod alternative;
mod category;
mod error;
mod eval;
mod table;
mod tag;

pub use alternative::Alternative;
pub use category::Category;
pub use error::{GrammarError, GrammarResult};
pub use eval::{Eval, GroupEval, GroupPredEval, NounEval, NounPredEval, RuleEval};
pub use table::{Grammar, COLOR_CHOICES, COLUMN_CHOICES, ROW_CHOICES, SHAPE_CHOICES};
pub use tag::{Tag, TagSet};
