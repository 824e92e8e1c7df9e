//! Fragment categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five kinds of rule fragment.
///
/// The category fixes what a fragment evaluates to:
/// - `Rule`: grid -> bool
/// - `Noun`, `NounPred`: (grid, cell) -> bool
/// - `Group`: grid -> groups of cells
/// - `GroupPred`: (grid, group) -> bool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Rule,
    Noun,
    NounPred,
    Group,
    GroupPred,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 5] = [
        Category::Rule,
        Category::Noun,
        Category::NounPred,
        Category::Group,
        Category::GroupPred,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the category name as written in descriptions and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Rule => "rule",
            Category::Noun => "noun",
            Category::NounPred => "nounPred",
            Category::Group => "group",
            Category::GroupPred => "groupPred",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
