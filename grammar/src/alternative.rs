//! Grammar alternatives.

use crate::{Category, Eval, Tag, TagSet};

/// One weighted choice within a fragment category.
///
/// Description templates use `%k` for child `k`'s singular description,
/// `$k` for its plural description and `@` for the chosen attribute text.
#[derive(Debug, Clone)]
pub struct Alternative {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// Relative selection weight. Zero is never selected.
    pub weight: u32,
    /// Categories of the child fragments, in order.
    pub child_slots: &'static [Category],
    /// Attribute texts, one of which is picked uniformly.
    pub attribute_choices: Option<&'static [&'static str]>,
    /// Tags that make this alternative ineligible when already active.
    pub exclusion_tags: TagSet,
    /// Children track tags from a fresh context.
    pub independent_child_tags: bool,
    pub description_singular: Option<&'static str>,
    pub description_plural: Option<&'static str>,
    /// How the fragment evaluates. `None` marks a placeholder that is never generated.
    pub eval: Option<Eval>,
}

impl Alternative {
    pub fn new(name: &'static str, eval: impl Into<Eval>) -> Self {
        Self {
            eval: Some(eval.into()),
            ..Self::placeholder(name)
        }
    }

    /// An entry without an evaluation kind.
    pub fn placeholder(name: &'static str) -> Self {
        Self {
            name,
            weight: 0,
            child_slots: &[],
            attribute_choices: None,
            exclusion_tags: TagSet::EMPTY,
            independent_child_tags: false,
            description_singular: None,
            description_plural: None,
            eval: None,
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_children(mut self, slots: &'static [Category]) -> Self {
        self.child_slots = slots;
        self
    }

    pub fn with_attributes(mut self, choices: &'static [&'static str]) -> Self {
        self.attribute_choices = Some(choices);
        self
    }

    pub fn with_tags(mut self, tags: &[Tag]) -> Self {
        self.exclusion_tags = TagSet::of(tags);
        self
    }

    pub fn with_independent_children(mut self) -> Self {
        self.independent_child_tags = true;
        self
    }

    pub fn with_singular(mut self, template: &'static str) -> Self {
        self.description_singular = Some(template);
        self
    }

    pub fn with_plural(mut self, template: &'static str) -> Self {
        self.description_plural = Some(template);
        self
    }

    /// Returns true if the alternative can be generated at all.
    pub fn is_generable(&self) -> bool {
        self.eval.is_some()
    }

    /// Returns true if none of this alternative's tags are in `active`.
    pub fn is_eligible(&self, active: TagSet) -> bool {
        self.is_generable() && !self.exclusion_tags.intersects(active)
    }

    /// Number of attribute choices (zero when there are none).
    pub fn attribute_count(&self) -> usize {
        self.attribute_choices.map_or(0, <[_]>::len)
    }
}
