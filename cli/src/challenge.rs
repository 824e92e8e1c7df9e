//! Challenge mode: a shuffled run of grids for the player to classify.

use serde::Serialize;
use tracing::debug;
use zendo_core::Grid;
use zendo_session::Session;

/// One grid of a challenge and whether it satisfies the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub grid: Grid,
    pub valid: bool,
}

/// Build a challenge of up to `stages` grids for the session's rule.
///
/// Asks for `stages - 1` grids of each kind, shuffles them together and
/// keeps the first `stages`, so the mix is random but never all one kind
/// unless the sampler fell short.
pub fn build_challenge(session: &mut Session, stages: usize) -> Vec<Stage> {
    let want = stages.saturating_sub(1);
    let examples = session.generate_examples(want, want);
    debug!(
        valid = examples.valid.len(),
        invalid = examples.invalid.len(),
        "challenge pool"
    );

    let mut grids = examples.into_grids();
    session.shuffle(&mut grids);
    grids.truncate(stages);

    grids
        .into_iter()
        .map(|grid| Stage {
            valid: session.judge(&grid),
            grid,
        })
        .collect()
}
