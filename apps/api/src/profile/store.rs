//! Last-profile store. The most recently saved profile is the only state the
//! service keeps; resume scoring and job ranking read it.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`, so handlers never touch a
//! process-wide global and tests can inject a fresh store per router.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::profile::Profile;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns a snapshot of the last saved profile, or `Profile::default()`.
    async fn load(&self) -> Profile;

    /// Replaces the stored profile wholesale.
    async fn save(&self, profile: Profile);
}

/// Single-slot in-memory store. Lost on restart.
#[derive(Default)]
pub struct InMemoryProfileStore {
    slot: RwLock<Profile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self) -> Profile {
        self.slot.read().await.clone()
    }

    async fn save(&self, profile: Profile) {
        info!(
            role = %profile.role,
            skill_count = profile.skills.len(),
            "Saving profile"
        );
        *self.slot.write().await = profile;
    }
}
