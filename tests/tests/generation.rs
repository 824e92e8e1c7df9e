//! Properties of randomly generated rules over the standard grammar.

use pretty_assertions::assert_eq;
use zendo_grammar::{Tag, TagSet};
use zendo_rule::{instantiate, random_rule, Generator};
use zendo_tests::prelude::*;

const RULES: usize = 2_000;

fn tags_of(grammar: &Grammar, node: &Skeleton) -> TagSet {
    grammar
        .get(node.category, node.index)
        .map(|alt| alt.exclusion_tags)
        .unwrap_or(TagSet::EMPTY)
}

#[test]
fn test_generated_rules_are_fully_described() {
    let grammar = Grammar::standard();
    let mut rng = seeded(1);

    for _ in 0..RULES {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        let text = rule.description();
        assert!(!text.is_empty());
        assert!(
            !text.contains(['%', '$', '@']),
            "unsubstituted placeholder in {:?}",
            text
        );
    }
}

#[test]
fn test_reinstantiation_is_identical() {
    let grammar = Grammar::standard();
    let mut rng = seeded(2);

    for _ in 0..200 {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        let again = Rule::instantiate(&grammar, rule.skeleton().clone()).unwrap();
        assert_eq!(rule, again);
        assert_eq!(
            instantiate(&grammar, rule.skeleton()).unwrap().description(),
            rule.description()
        );
    }
}

#[test]
fn test_evaluation_is_total() {
    let grammar = Grammar::standard();
    let mut rng = seeded(3);

    for _ in 0..300 {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        for _ in 0..20 {
            let grid = zendo_sampler::random_grid(&mut rng);
            let _ = rule.evaluate(&grid);
        }
        let _ = rule.evaluate(&Grid::new());
    }
}

#[test]
fn test_identical_group_predicate_never_generated() {
    let grammar = Grammar::standard();
    let mut rng = seeded(4);

    for _ in 0..RULES {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        rule.skeleton().walk(&mut |node| {
            assert!(
                !(node.category == Category::GroupPred && node.index == GPRED_IDENTICAL),
                "generated the identical group predicate"
            );
        });
    }
}

#[test]
fn test_filled_rules_never_take_positional_nouns() {
    let grammar = Grammar::standard();
    let mut rng = seeded(5);

    for _ in 0..RULES {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        let root = rule.skeleton();
        if root.index == 4 || root.index == 5 {
            let noun = &root.children[0];
            assert!(
                noun.index != NOUN_ROW && noun.index != NOUN_COLUMN,
                "{}",
                rule.description()
            );
        }
    }
}

#[test]
fn test_root_siblings_never_share_tags() {
    let grammar = Grammar::standard();
    let mut rng = seeded(6);

    for _ in 0..RULES {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        let root = rule.skeleton();
        if let [first, second] = root.children.as_slice() {
            assert!(
                !tags_of(&grammar, first).intersects(tags_of(&grammar, second)),
                "{}",
                rule.description()
            );
        }
    }
}

#[test]
fn test_position_is_never_doubled_on_a_filled_rule() {
    let grammar = Grammar::standard();
    let mut rng = seeded(7);

    for _ in 0..RULES {
        let skeleton = Generator::new(&grammar).generate_rule(&mut rng).unwrap();
        if tags_of(&grammar, &skeleton).contains(Tag::Position) {
            skeleton.walk(&mut |node| {
                if node.category == Category::Noun || node.category == Category::NounPred {
                    assert!(!tags_of(&grammar, node).contains(Tag::Position));
                }
            });
        }
    }
}

#[test]
fn test_root_distribution_follows_weights() {
    let grammar = Grammar::standard();
    let alternatives = grammar.alternatives(Category::Rule);
    let total: u32 = alternatives.iter().map(|a| a.weight).sum();
    let mut counts = vec![0usize; alternatives.len()];
    let mut rng = seeded(8);

    let trials = 10_000;
    for _ in 0..trials {
        let skeleton = Generator::new(&grammar).generate_rule(&mut rng).unwrap();
        counts[skeleton.index] += 1;
    }

    for (alt, &count) in alternatives.iter().zip(&counts) {
        let expected = alt.weight as f64 / total as f64;
        let observed = count as f64 / trials as f64;
        assert!(
            (observed - expected).abs() < 0.02,
            "{}: expected {:.3}, observed {:.3}",
            alt.name,
            expected,
            observed
        );
    }
}

#[test]
fn test_same_seed_same_rules() {
    let grammar = Grammar::standard();
    let mut a = seeded(99);
    let mut b = seeded(99);

    for _ in 0..50 {
        assert_eq!(
            random_rule(&grammar, &mut a).unwrap(),
            random_rule(&grammar, &mut b).unwrap()
        );
    }
}
