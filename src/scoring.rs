use crate::types::profile::{Profile, ScoredProfile};
use crate::types::scoring::{Score, Weights, MAX_SCORE};

pub fn score(profile: &Profile) -> Score {
    score_with(profile, &Weights::default())
}

/// Additive score over the enabled attributes, capped at [`MAX_SCORE`]
/// even when `weights` sum past it.
pub fn score_with(profile: &Profile, weights: &Weights) -> Score {
    let raw: Score = profile
        .attributes()
        .enabled()
        .map(|attribute| weights.weight(attribute))
        .sum();
    let score = raw.min(MAX_SCORE);
    tracing::debug!(
        profile = profile.name(),
        raw,
        score,
        ceiling = weights.total(),
        "scored profile"
    );
    score
}

pub fn scored(profile: &Profile) -> ScoredProfile<'_> {
    ScoredProfile {
        profile,
        score: score(profile),
    }
}
