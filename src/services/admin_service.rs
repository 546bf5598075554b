//! Domain service for the moderation dashboard.
//!
//! Covers the worker approval workflow, manual worker creation and removal,
//! and the searchable pending/active worker lists.

use thiserror::Error;

use crate::models::{Skill, WorkerProfile, WorkerStatus};

/// Errors specific to moderation operations.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Worker not found: {0}")]
    WorkerNotFound(String),

    #[error("Cannot move worker from {from} to {to}")]
    InvalidTransition {
        from: WorkerStatus,
        to: WorkerStatus,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AdminError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Worker created directly by the admin; goes live without review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWorker {
    pub name: String,
    pub phone: String,
    pub area: String,
    pub skills: Vec<Skill>,
    pub daily_wage: Option<u32>,
    pub experience_years: Option<u32>,
    pub photo_url: Option<String>,
}

/// Domain service trait for moderation.
pub trait AdminService: Send + Sync {
    /// Pending workers whose name or phone contains `search`.
    fn pending_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError>;

    /// Approved workers whose name or phone contains `search`.
    fn active_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError>;

    /// Suspended workers, listed so they can be found again and reinstated.
    fn suspended_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError>;

    fn rejected_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError>;

    /// # Errors
    ///
    /// Returns [`AdminError::InvalidTransition`] unless the worker is pending or suspended.
    fn approve(&self, worker_id: &str) -> Result<WorkerProfile, AdminError>;

    fn reject(&self, worker_id: &str, reason: Option<String>)
    -> Result<WorkerProfile, AdminError>;

    fn suspend(&self, worker_id: &str) -> Result<WorkerProfile, AdminError>;

    /// Permanently removes a worker. Callers confirm with the user first.
    fn delete_worker(&self, worker_id: &str) -> Result<(), AdminError>;

    fn add_worker(&self, worker: NewWorker) -> Result<WorkerProfile, AdminError>;
}
