use tracing::debug;

use crate::jobs::relevance::RelevanceScorer;
use crate::models::job::{Job, RankedJob};
use crate::models::profile::Profile;

/// Static job listings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

const DEFAULT_JOBS: &[(&str, &str, &str, &[&str])] = &[
    (
        "Frontend Developer",
        "Acme",
        "Remote",
        &["javascript", "html", "css", "react"],
    ),
    (
        "Backend Developer",
        "Globex",
        "NYC",
        &["python", "sql", "api", "linux"],
    ),
    (
        "Data Analyst",
        "Initech",
        "SF",
        &["sql", "python", "excel", "pandas"],
    ),
];

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn default_catalog() -> Self {
        let jobs = DEFAULT_JOBS
            .iter()
            .map(|(title, company, location, skills)| Job {
                title: title.to_string(),
                company: company.to_string(),
                location: location.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self::new(jobs)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Scores every job against the profile, best first. Equal scores keep catalog order.
    pub fn rank(&self, profile: &Profile, scorer: &dyn RelevanceScorer) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = self
            .jobs
            .iter()
            .map(|job| {
                let relevance = scorer.score(&profile.skills, &job.skills);
                debug!(job = %job.title, score = relevance.score, "Scored job");
                RankedJob {
                    job: job.clone(),
                    relevance: relevance.score,
                    overlap: relevance.overlap,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        ranked
    }
}
