//! Skeleton instantiation.

use zendo_grammar::Grammar;

use crate::error::{RuleError, RuleResult};
use crate::{Fragment, Skeleton};

/// Turn a skeleton into a fragment tree.
///
/// Children are instantiated first. In both description templates `%k` is
/// replaced by child `k`'s singular text and `$k` by its plural text, then
/// `@` by the chosen attribute. Only the first occurrence of each placeholder
/// is replaced. A missing plural template falls back to the singular one.
pub fn instantiate(grammar: &Grammar, skeleton: &Skeleton) -> RuleResult<Fragment> {
    let category = skeleton.category;
    let alt = grammar
        .get(category, skeleton.index)
        .ok_or_else(|| RuleError::missing_alternative(category, skeleton.index))?;

    let slots_match = skeleton.children.len() == alt.child_slots.len()
        && skeleton
            .children
            .iter()
            .zip(alt.child_slots)
            .all(|(child, &slot)| child.category == slot);
    if !slots_match {
        return Err(RuleError::slot_mismatch(
            category,
            skeleton.index,
            alt.child_slots,
            skeleton.children.iter().map(|c| c.category),
        ));
    }

    let children = skeleton
        .children
        .iter()
        .map(|child| instantiate(grammar, child))
        .collect::<RuleResult<Vec<_>>>()?;

    let mut singular = alt.description_singular.unwrap_or_default().to_string();
    let mut plural = alt
        .description_plural
        .or(alt.description_singular)
        .unwrap_or_default()
        .to_string();

    for (k, child) in children.iter().enumerate() {
        let single_mark = format!("%{}", k + 1);
        let plural_mark = format!("${}", k + 1);

        singular = singular.replacen(&single_mark, child.description(), 1);
        plural = plural.replacen(&single_mark, child.description(), 1);

        singular = singular.replacen(&plural_mark, child.description_plural(), 1);
        plural = plural.replacen(&plural_mark, child.description_plural(), 1);
    }

    if let Some(choices) = alt.attribute_choices {
        let text = choices.get(skeleton.attribute).ok_or_else(|| {
            RuleError::attribute_out_of_range(
                category,
                skeleton.index,
                skeleton.attribute,
                choices.len(),
            )
        })?;
        singular = singular.replacen('@', text, 1);
        plural = plural.replacen('@', text, 1);
    }

    Ok(Fragment {
        category,
        name: alt.name,
        description_singular: singular,
        description_plural: plural,
        children,
        attribute: skeleton.attribute,
        eval: alt.eval,
    })
}
