use std::sync::Arc;

use crate::config::Config;
use crate::jobs::catalog::JobCatalog;
use crate::jobs::relevance::{OverlapScorer, RelevanceScorer};
use crate::profile::store::{InMemoryProfileStore, ProfileStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Last saved profile. Default: InMemoryProfileStore.
    pub profiles: Arc<dyn ProfileStore>,
    /// Pluggable relevance scorer. Default: OverlapScorer.
    pub scorer: Arc<dyn RelevanceScorer>,
    pub catalog: Arc<JobCatalog>,
}

impl AppState {
    /// State with the default in-memory store, overlap scorer and static catalog.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            profiles: Arc::new(InMemoryProfileStore::new()),
            scorer: Arc::new(OverlapScorer),
            catalog: Arc::new(JobCatalog::default_catalog()),
        }
    }
}
