use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::RankedJob;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<RankedJob>,
    pub profile: Profile,
}

/// GET /jobs
///
/// Ranks the static catalog against the last saved profile.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let profile = state.profiles.load().await;
    let jobs = state.catalog.rank(&profile, state.scorer.as_ref());
    Ok(Json(JobListResponse { jobs, profile }))
}
