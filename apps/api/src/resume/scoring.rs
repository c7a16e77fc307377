use std::collections::BTreeSet;

use crate::jobs::relevance::RelevanceScorer;
use crate::models::profile::Profile;

/// Denominator used when no profile has been saved yet.
pub const EMPTY_PROFILE_DENOMINATOR: usize = 6;

/// Scores extracted resume keywords against the saved profile's skills.
///
/// The denominator is the profile's distinct skill count, or
/// `EMPTY_PROFILE_DENOMINATOR` when the profile lists none.
pub fn score_resume(profile: &Profile, keywords: &[String], scorer: &dyn RelevanceScorer) -> u32 {
    let distinct: BTreeSet<&str> = profile.skills.iter().map(String::as_str).collect();
    let denominator = if distinct.is_empty() {
        EMPTY_PROFILE_DENOMINATOR
    } else {
        distinct.len()
    };

    scorer
        .score_with_denominator(keywords, &profile.skills, denominator)
        .score
}
