use serde::{Deserialize, Serialize};

/// Suggestions and missing core skills for a saved profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub suggestions: Vec<String>,
    pub gaps: Vec<String>,
}

const DATA_TRACK: &[&str] = &[
    "Strengthen Python, SQL, and Pandas.",
    "Add projects: EDA, dashboards, A/B tests.",
];

const WEB_TRACK: &[&str] = &[
    "Practice HTML/CSS/JS; build responsive UIs.",
    "Add projects using fetch/REST and forms.",
];

/// Only used when the role matched no track.
const GENERIC_TRACK: &[&str] = &[
    "Quantify impact in your projects (metrics, %).",
    "Write clear README and deploy demos.",
];

/// Skills every profile is expected to list. Gaps are reported in this order.
pub const WANTED_SKILLS: &[&str] = &["python", "sql", "git", "linux"];

/// Career track a role string points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTrack {
    Data,
    Web,
    General,
}

impl RoleTrack {
    /// Every specific track the role mentions, data first.
    ///
    /// Matching is a case-insensitive substring test:
    /// - "data" → `Data`
    /// - "frontend" or "web" → `Web`
    pub fn detect_all(role: &str) -> Vec<RoleTrack> {
        let role_lower = role.to_lowercase();
        let mut tracks = Vec::new();
        if role_lower.contains("data") {
            tracks.push(RoleTrack::Data);
        }
        if role_lower.contains("frontend") || role_lower.contains("web") {
            tracks.push(RoleTrack::Web);
        }
        tracks
    }

    /// The first matching track, or `General`.
    pub fn primary(role: &str) -> RoleTrack {
        Self::detect_all(role)
            .first()
            .copied()
            .unwrap_or(RoleTrack::General)
    }

    fn suggestions(self) -> &'static [&'static str] {
        match self {
            RoleTrack::Data => DATA_TRACK,
            RoleTrack::Web => WEB_TRACK,
            RoleTrack::General => GENERIC_TRACK,
        }
    }
}

/// Builds role-track suggestions and core-skill gaps.
///
/// Both specific tracks may apply; the generic track is a fallback only.
pub fn analyze_profile(role: &str, skills: &[String]) -> ProfileAnalysis {
    let mut tracks = RoleTrack::detect_all(role);
    if tracks.is_empty() {
        tracks.push(RoleTrack::General);
    }

    let suggestions: Vec<String> = tracks
        .iter()
        .flat_map(|track| track.suggestions().iter().map(|s| s.to_string()))
        .collect();

    let gaps = WANTED_SKILLS
        .iter()
        .filter(|wanted| !skills.iter().any(|s| s == *wanted))
        .map(|s| s.to_string())
        .collect();

    ProfileAnalysis { suggestions, gaps }
}
