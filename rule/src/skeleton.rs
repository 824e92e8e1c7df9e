//! Rule skeletons.

use serde::{Deserialize, Serialize};
use zendo_grammar::Category;

/// The uninstantiated choice tree of a rule: which alternative was picked
/// for each fragment, and which attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skeleton {
    pub category: Category,
    /// Position of the chosen alternative in its category's table.
    pub index: usize,
    pub children: Vec<Skeleton>,
    /// Index into the alternative's attribute choices; 0 when it has none.
    pub attribute: usize,
}

impl Skeleton {
    pub fn new(category: Category, index: usize) -> Self {
        Self {
            category,
            index,
            children: Vec::new(),
            attribute: 0,
        }
    }

    pub fn with_child(mut self, child: Skeleton) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_attribute(mut self, attribute: usize) -> Self {
        self.attribute = attribute;
        self
    }

    /// Visit every fragment, parents before children.
    pub fn walk(&self, visit: &mut impl FnMut(&Skeleton)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
