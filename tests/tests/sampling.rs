//! Example sampling, sessions and the grid text codec across crates.

use pretty_assertions::assert_eq;
use zendo_grammar::{Alternative, NounEval, RuleEval};
use zendo_rule::random_rule;
use zendo_sampler::{generate_examples, ExampleGenerator, Examples, SamplerConfig};
use zendo_session::{Session, SessionConfig};
use zendo_tests::prelude::*;

#[test]
fn test_examples_for_random_rules() {
    let grammar = Grammar::standard();
    let mut rng = seeded(10);

    for _ in 0..100 {
        let rule = random_rule(&grammar, &mut rng).unwrap();
        let examples = generate_examples(&rule, 4, 4, &mut rng);

        assert!(examples.valid.len() <= 4);
        assert!(examples.invalid.len() <= 4);
        assert!(examples.attempts <= 500);
        assert!(examples.valid.iter().all(|g| rule.evaluate(g)));
        assert!(examples.invalid.iter().all(|g| !rule.evaluate(g)));
        if examples.is_complete(4, 4) {
            assert_eq!(examples.len(), 8);
        } else {
            assert_eq!(examples.attempts, 500);
        }
    }
}

#[test]
fn test_contradiction_exhausts_attempts() {
    let rule = Scenario::new("red_blank")
        .rule(exists(blank(), pred(PRED_COLOR, RED)))
        .build()
        .unwrap();
    let mut rng = seeded(11);

    let examples = generate_examples(&rule, 2, 2, &mut rng);
    assert!(examples.valid.is_empty());
    assert_eq!(examples.invalid.len(), 2);
    assert_eq!(examples.attempts, 500);
}

#[test]
fn test_attempt_limit_is_configurable() {
    let rule = Scenario::new("red_blank")
        .rule(exists(blank(), pred(PRED_COLOR, RED)))
        .build()
        .unwrap();
    let generator = ExampleGenerator::new(SamplerConfig::new().with_attempt_limit(25));

    let examples = generator.generate(&rule, 1, 0, &mut seeded(12));
    assert_eq!(examples.attempts, 25);
}

#[test]
fn test_examples_serialize() {
    let rule = Scenario::new("every_red_circle")
        .rule(every(noun(NOUN_COLOR, RED), pred(PRED_SHAPE, CIRCLE)))
        .build()
        .unwrap();
    let examples = generate_examples(&rule, 2, 2, &mut seeded(13));

    let json = serde_json::to_string(&examples).unwrap();
    let back: Examples = serde_json::from_str(&json).unwrap();
    assert_eq!(back, examples);

    let value = serde_json::to_value(&examples).unwrap();
    assert_eq!(value["valid"][0].as_array().unwrap().len(), 9);
}

#[test]
fn test_compact_text_round_trip() {
    let mut rng = seeded(14);
    for _ in 0..200 {
        let grid = zendo_sampler::random_grid(&mut rng);
        let text = grid.to_compact();
        assert_eq!(text.parse::<Grid>().unwrap(), grid);
    }
}

#[test]
fn test_session_reproducible_under_seed() {
    let config = SessionConfig::new().with_seed(2024);
    let mut a = Session::new(config.clone()).unwrap();
    let mut b = Session::new(config).unwrap();

    for _ in 0..10 {
        assert_eq!(a.rule(), b.rule());
        assert_eq!(a.generate_examples(3, 3), b.generate_examples(3, 3));

        let mut left: Vec<Grid> = (0..6).map(|_| a.random_grid()).collect();
        let mut right: Vec<Grid> = (0..6).map(|_| b.random_grid()).collect();
        a.shuffle(&mut left);
        b.shuffle(&mut right);
        assert_eq!(left, right);

        a.reset().unwrap();
        b.reset().unwrap();
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = Session::new(SessionConfig::new().with_seed(1)).unwrap();
    let mut b = Session::new(SessionConfig::new().with_seed(2)).unwrap();

    let mut differs = false;
    for _ in 0..20 {
        differs |= a.rule() != b.rule();
        a.reset().unwrap();
        b.reset().unwrap();
    }
    assert!(differs);
}

#[test]
fn test_session_judges_parsed_grids() {
    // one rule is possible: "There is a row filled with red symbols"
    let grammar = Grammar::empty()
        .with(
            Category::Rule,
            Alternative::new("row_filled", RuleEval::RowFilled)
                .with_children(&[Category::Noun])
                .with_singular("There is a row filled with $1")
                .with_weight(1),
        )
        .with(
            Category::Noun,
            Alternative::new("color", NounEval::Color)
                .with_attributes(&["red"])
                .with_singular("@ symbol")
                .with_plural("@ symbols")
                .with_weight(1),
        );
    let session = Session::with_grammar(grammar, SessionConfig::new().with_seed(15)).unwrap();
    assert_eq!(session.description(), "There is a row filled with red symbols");

    let cases = [
        (". . .\nrC rT rS\n. . .", true),
        ("rC rT rS\nbC . .\n. . .", true),
        ("rC . bS\n. yT .\n. . .", false),
        ("rC rT .\nrS . .\nrC . .", false),
        (". . .\n. . .\n. . .", false),
    ];
    for (text, expected) in cases {
        let grid: Grid = text.parse().unwrap();
        assert_eq!(session.judge(&grid), expected, "{}", text);
    }
}
