// Resume: upload sampling, keyword extraction, and overlap scoring against the saved profile.

pub mod handlers;
pub mod keywords;
pub mod scoring;
