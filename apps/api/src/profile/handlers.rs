//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileForm};
use crate::profile::analyzer::{analyze_profile, ProfileAnalysis};
use crate::profile::skills::parse_skills;
use crate::routes::extract::JsonOrForm;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub saved: bool,
    pub data: Profile,
    pub analysis: ProfileAnalysis,
}

/// GET /profile
pub async fn handle_profile_form() -> Json<Value> {
    Json(json!({ "message": "Profile form endpoint", "saved": false }))
}

/// POST /profile
///
/// Normalizes the skill list, analyzes it against the role, and overwrites the
/// stored profile.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    JsonOrForm(form): JsonOrForm<ProfileForm>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let skills = parse_skills(&form.skills);
    let analysis = analyze_profile(&form.role, &skills);

    let profile = Profile {
        name: form.name,
        role: form.role,
        skills,
    };
    state.profiles.save(profile.clone()).await;

    Ok(Json(SaveProfileResponse {
        saved: true,
        data: profile,
        analysis,
    }))
}
