//! Relevance scoring: how much of a required skill set a user already covers.
//!
//! Default: `OverlapScorer` (set intersection, integer percentage).
//!
//! `AppState` holds an `Arc<dyn RelevanceScorer>`, swapped at startup.

use std::collections::BTreeSet;

/// Result of comparing a user's skills against a required set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relevance {
    /// 0 – 100
    pub score: u32,
    /// Shared skills, sorted alphabetically.
    pub overlap: Vec<String>,
}

/// Implement this to swap scoring backends without touching handlers.
pub trait RelevanceScorer: Send + Sync {
    /// Scores `user` against `required`, where `denominator` is the size the
    /// overlap is measured against. Callers normally pass `required`'s distinct size.
    fn score_with_denominator(
        &self,
        user: &[String],
        required: &[String],
        denominator: usize,
    ) -> Relevance;

    fn score(&self, user: &[String], required: &[String]) -> Relevance {
        let distinct: BTreeSet<&str> = required.iter().map(String::as_str).collect();
        self.score_with_denominator(user, required, distinct.len())
    }
}

/// Plain set-overlap scorer.
///
/// score = floor(100 × |user ∩ required| / max(1, denominator)), capped at 100.
pub struct OverlapScorer;

impl RelevanceScorer for OverlapScorer {
    fn score_with_denominator(
        &self,
        user: &[String],
        required: &[String],
        denominator: usize,
    ) -> Relevance {
        let user_set: BTreeSet<&str> = user.iter().map(String::as_str).collect();
        let required_set: BTreeSet<&str> = required.iter().map(String::as_str).collect();

        let overlap: Vec<String> = user_set
            .intersection(&required_set)
            .map(|s| s.to_string())
            .collect();

        Relevance {
            score: overlap_percentage(overlap.len(), denominator),
            overlap,
        }
    }
}

/// Integer percentage with a zero denominator forced to 1, so empty requirements score 0.
pub fn overlap_percentage(matched: usize, denominator: usize) -> u32 {
    let pct = (100 * matched) / denominator.max(1);
    pct.min(100) as u32
}
