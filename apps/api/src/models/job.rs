use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
}

/// A catalog job annotated with how well it fits the saved profile.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: Job,
    /// 0 – 100
    pub relevance: u32,
    /// Skills shared with the profile, sorted alphabetically.
    pub overlap: Vec<String>,
}
