//! Domain service for the worker dashboard.

use thiserror::Error;

use crate::models::{JobPost, Review, WorkerProfile, WorkerStatus};

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    #[error("Employer not found: {0}")]
    EmployerNotFound(String),

    #[error("Account is {0}; only approved workers can go available")]
    NotApproved(WorkerStatus),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for WorkerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A job as shown on the worker's feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub job: JobPost,
    /// Posted within the urgent window.
    pub urgent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerProfileUpdate {
    pub name: Option<String>,
    pub area: Option<String>,
    pub daily_wage: Option<u32>,
    pub experience_years: Option<u32>,
    pub bio: Option<String>,
}

pub trait WorkerService: Send + Sync {
    /// Active jobs, the worker's own area first, newest first within each group.
    fn find_work(&self, worker_id: &str) -> Result<Vec<JobListing>, WorkerError>;

    /// Flips today's availability and stamps the update time.
    fn toggle_availability(&self, worker_id: &str) -> Result<WorkerProfile, WorkerError>;

    /// Clears an availability flag left over from an earlier local day.
    /// Returns whether the flag was reset.
    fn refresh_daily_availability(&self, worker_id: &str) -> Result<bool, WorkerError>;

    fn rate_employer(
        &self,
        worker_id: &str,
        employer_id: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Review, WorkerError>;

    fn update_profile(
        &self,
        worker_id: &str,
        update: WorkerProfileUpdate,
    ) -> Result<WorkerProfile, WorkerError>;
}
