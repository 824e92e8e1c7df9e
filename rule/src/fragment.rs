//! Instantiated fragments and rules.

use zendo_core::Grid;
use zendo_grammar::{Category, Eval, Grammar};

use crate::error::{RuleError, RuleResult};
use crate::{instantiate, Skeleton};

/// A described, evaluable node of an instantiated rule.
///
/// Fragments are only built by [`instantiate`], which guarantees that the
/// children match the alternative's slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub(crate) category: Category,
    pub(crate) name: &'static str,
    pub(crate) description_singular: String,
    pub(crate) description_plural: String,
    pub(crate) children: Vec<Fragment>,
    pub(crate) attribute: usize,
    pub(crate) eval: Option<Eval>,
}

impl Fragment {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Name of the alternative this fragment was built from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &str {
        &self.description_singular
    }

    pub fn description_plural(&self) -> &str {
        &self.description_plural
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    pub fn eval(&self) -> Option<Eval> {
        self.eval
    }
}

/// A secret rule: a `rule` fragment tree plus the skeleton it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    root: Fragment,
    skeleton: Skeleton,
}

impl Rule {
    /// Instantiate a skeleton whose root is a `rule` fragment.
    pub fn instantiate(grammar: &Grammar, skeleton: Skeleton) -> RuleResult<Self> {
        if skeleton.category != Category::Rule {
            return Err(RuleError::not_a_rule(skeleton.category));
        }
        let root = instantiate(grammar, &skeleton)?;
        Ok(Self { root, skeleton })
    }

    /// Does the grid satisfy the rule?
    pub fn evaluate(&self, grid: &Grid) -> bool {
        self.root.holds(grid)
    }

    /// Human-readable rule text, e.g. "Every red symbol is a circle".
    pub fn description(&self) -> &str {
        self.root.description()
    }

    pub fn description_plural(&self) -> &str {
        self.root.description_plural()
    }

    pub fn root(&self) -> &Fragment {
        &self.root
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }
}
