//! Weighted fragment generation.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::trace;
use zendo_grammar::{Category, Grammar, Tag, TagSet};

use crate::error::{RuleError, RuleResult};
use crate::Skeleton;

/// Pick one candidate with probability proportional to its weight.
///
/// `candidates` holds `(value, weight)` pairs. Returns `None` when the list
/// is empty or every weight is zero; zero-weight candidates are never picked.
pub fn pick_weighted<R: Rng + ?Sized>(candidates: &[(usize, u32)], rng: &mut R) -> Option<usize> {
    let dist = WeightedIndex::<u32>::new(candidates.iter().map(|&(_, weight)| weight)).ok()?;
    Some(candidates[dist.sample(rng)].0)
}

/// Builds random rule skeletons from a grammar.
pub struct Generator<'g> {
    grammar: &'g Grammar,
}

impl<'g> Generator<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Generate a skeleton for a whole rule, starting with no active tags.
    pub fn generate_rule(&self, rng: &mut impl Rng) -> RuleResult<Skeleton> {
        self.generate(Category::Rule, TagSet::EMPTY, rng)
            .map(|(skeleton, _)| skeleton)
    }

    /// Generate a fragment of `category` under the `active` tags.
    ///
    /// Returns the skeleton together with the tag context after it, which the
    /// caller threads into the next sibling.
    pub fn generate(
        &self,
        category: Category,
        active: TagSet,
        rng: &mut impl Rng,
    ) -> RuleResult<(Skeleton, TagSet)> {
        let alternatives = self.grammar.alternatives(category);

        let candidates: Vec<(usize, u32)> = alternatives
            .iter()
            .enumerate()
            .filter(|(_, alt)| alt.is_eligible(active))
            .map(|(i, alt)| (i, alt.weight))
            .collect();

        let index = pick_weighted(&candidates, rng)
            .ok_or_else(|| RuleError::no_eligible_alternative(category))?;
        let choice = &alternatives[index];

        trace!(
            category = %category,
            alternative = choice.name,
            active = ?active,
            "picked alternative"
        );

        let mut tags = active.union(choice.exclusion_tags);

        // position stays global even across independent children
        let fresh = if tags.contains(Tag::Position) {
            TagSet::of(&[Tag::Position])
        } else {
            TagSet::EMPTY
        };

        let mut skeleton = Skeleton::new(category, index);
        for &slot in choice.child_slots {
            let child = if choice.independent_child_tags {
                self.generate(slot, fresh, rng)?.0
            } else {
                let (child, after) = self.generate(slot, tags, rng)?;
                tags = after;
                child
            };
            skeleton.children.push(child);
        }

        let choices = choice.attribute_count();
        if choices > 0 {
            skeleton.attribute = rng.gen_range(0..choices);
        }

        Ok((skeleton, tags))
    }
}
