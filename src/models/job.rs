use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Timestamp;
use crate::models::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// A request for labour posted by an employer.
///
/// `employer_name` is captured when the job is posted and is not refreshed
/// if the employer later renames themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    pub id: String,
    pub employer_id: String,
    pub employer_name: String,
    #[serde(rename = "type")]
    pub job_type: Skill,
    pub area: String,
    pub workers_needed: u32,
    pub payment: u32,
    pub date_needed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub status: JobStatus,
}

impl JobPost {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}
