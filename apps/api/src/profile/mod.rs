// Profile: skill parsing, role-based analysis, and the injected last-profile store.

pub mod analyzer;
pub mod handlers;
pub mod skills;
pub mod store;
