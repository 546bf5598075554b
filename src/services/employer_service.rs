//! Domain service for the employer dashboard.

use thiserror::Error;

use crate::derivations::WorkerFilter;
use crate::models::{EmployerProfile, JobPost, Review, Skill, WorkerProfile};

/// Errors specific to employer operations.
#[derive(Debug, Error)]
pub enum EmployerError {
    #[error("Employer not found: {0}")]
    EmployerNotFound(String),

    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Job {0} belongs to another employer")]
    NotJobOwner(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for EmployerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Job posting form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub job_type: Skill,
    /// Defaults to the employer's own area when blank.
    pub area: Option<String>,
    pub workers_needed: u32,
    pub payment: u32,
    pub date_needed: String,
    pub description: Option<String>,
}

/// Editable employer profile fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerProfileUpdate {
    pub name: Option<String>,
    pub area: Option<String>,
    pub bio: Option<String>,
}

/// Domain service trait for employers.
pub trait EmployerService: Send + Sync {
    /// Approved workers matching `filter`, available first then best rated.
    fn find_workers(&self, filter: &WorkerFilter) -> Result<Vec<WorkerProfile>, EmployerError>;

    /// # Errors
    ///
    /// Returns [`EmployerError::Validation`] when payment or date is missing.
    fn post_job(&self, employer_id: &str, job: NewJob) -> Result<JobPost, EmployerError>;

    /// The employer's active jobs, read fresh from the store.
    fn my_jobs(&self, employer_id: &str) -> Result<Vec<JobPost>, EmployerError>;

    /// Deletes one of the employer's own jobs. Callers confirm with the user first.
    fn delete_job(&self, employer_id: &str, job_id: &str) -> Result<(), EmployerError>;

    fn rate_worker(
        &self,
        employer_id: &str,
        worker_id: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Review, EmployerError>;

    fn update_profile(
        &self,
        employer_id: &str,
        update: EmployerProfileUpdate,
    ) -> Result<EmployerProfile, EmployerError>;
}
