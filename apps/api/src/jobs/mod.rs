// Jobs: static catalog and skill-overlap ranking against the saved profile.

pub mod catalog;
pub mod handlers;
pub mod relevance;
