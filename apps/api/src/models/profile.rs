use serde::{Deserialize, Serialize};

/// The last profile a user saved. A single instance lives in the profile store.
///
/// `skills` are always trimmed and lowercased; duplicates are kept as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
}

/// Raw profile form as posted by the frontend. Missing fields default to "".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub role: String,
    /// Comma-separated skill list, e.g. "Python, SQL , git".
    pub skills: String,
}
