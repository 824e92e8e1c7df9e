//! Output formatting utilities for the CLI.

use std::fmt::Write;

use zendo_core::Grid;
use zendo_rule::Rule;
use zendo_sampler::Examples;

use crate::Stage;

/// Render a verdict as the player sees it.
pub fn format_verdict(valid: bool) -> &'static str {
    if valid {
        "follows the rule"
    } else {
        "breaks the rule"
    }
}

/// Render a titled, numbered list of grids.
pub fn format_grids(title: &str, grids: &[Grid]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}):", title, grids.len());
    for (i, grid) in grids.iter().enumerate() {
        let _ = writeln!(out, "\n#{}", i + 1);
        let _ = writeln!(out, "{}", grid);
    }
    out
}

/// Render both example buckets, valid first.
pub fn format_examples(examples: &Examples) -> String {
    let mut out = format_grids("Valid", &examples.valid);
    out.push('\n');
    out.push_str(&format_grids("Invalid", &examples.invalid));
    out
}

/// Render a challenge with its answers.
pub fn format_challenge(stages: &[Stage]) -> String {
    let mut out = String::new();
    for (i, stage) in stages.iter().enumerate() {
        let _ = writeln!(out, "Stage {}: {}", i + 1, format_verdict(stage.valid));
        let _ = writeln!(out, "{}\n", stage.grid);
    }
    out
}

/// JSON form of a rule: its text and the skeleton it was built from.
pub fn rule_json(rule: &Rule) -> serde_json::Value {
    serde_json::json!({
        "description": rule.description(),
        "description_plural": rule.description_plural(),
        "skeleton": rule.skeleton(),
    })
}
