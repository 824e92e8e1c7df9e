//! Zendo Rule
//!
//! Generate, instantiate and evaluate secret rules.
//!
//! Responsibilities:
//! - Pick a weighted alternative per fragment, honoring exclusion tags
//! - Recurse into child slots to build a rule skeleton
//! - Turn a skeleton into a described, evaluable fragment tree
//! - Evaluate rules against grids

mod error;
mod eval;
mod fragment;
mod generator;
mod instantiate;
mod skeleton;

pub use error::{RuleError, RuleResult};
pub use eval::{Argument, Outcome};
pub use fragment::{Fragment, Rule};
pub use generator::{pick_weighted, Generator};
pub use instantiate::instantiate;
pub use skeleton::Skeleton;

use rand::Rng;
use zendo_grammar::Grammar;

/// Generate and instantiate a random rule from `grammar`.
pub fn random_rule(grammar: &Grammar, rng: &mut impl Rng) -> RuleResult<Rule> {
    let skeleton = Generator::new(grammar).generate_rule(rng)?;
    Rule::instantiate(grammar, skeleton)
}
