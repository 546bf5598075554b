//! Account records for the three marketplace roles.
//!
//! Persisted as a single JSON array where each element carries a `role` tag
//! and camelCase fields; common account fields sit at the top level of each
//! record next to the role-specific ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Timestamp;
use crate::models::Skill;

pub const ADMIN_ID: &str = "admin1";
pub const ADMIN_PHONE: &str = "9999999999";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Employer,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Worker => f.write_str("worker"),
            Self::Employer => f.write_str("employer"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// Fields every role shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub phone: String,
    pub name: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Running rating aggregate. `rating_count == 0` means "no ratings yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTally {
    #[serde(default)]
    pub rating_sum: u32,
    #[serde(default)]
    pub rating_count: u32,
}

impl RatingTally {
    #[must_use]
    pub const fn new(rating_sum: u32, rating_count: u32) -> Self {
        Self {
            rating_sum,
            rating_count,
        }
    }

    pub fn record(&mut self, rating: u8) {
        self.rating_sum = self.rating_sum.saturating_add(u32::from(rating));
        self.rating_count = self.rating_count.saturating_add(1);
    }

    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.rating_count == 0 {
            None
        } else {
            Some(f64::from(self.rating_sum) / f64::from(self.rating_count))
        }
    }

    /// Average used for ordering; unrated counts as 0.
    #[must_use]
    pub fn ranking_score(&self) -> f64 {
        self.average().unwrap_or(0.0)
    }

    /// One-decimal average, or `"New"` when unrated.
    #[must_use]
    pub fn display(&self) -> String {
        match self.average() {
            Some(avg) => format!("{:.1}", (avg * 10.0).round() / 10.0),
            None => "New".to_string(),
        }
    }
}

/// Marketplace visibility gate for workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl WorkerStatus {
    /// Admin moderation graph. Nothing leads back to `Pending`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Approved, Self::Suspended)
                | (Self::Suspended, Self::Approved)
        )
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
            Self::Suspended => f.write_str("suspended"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    #[serde(flatten)]
    pub account: Account,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_proof_url: Option<String>,
    pub skills: Vec<Skill>,
    pub area: String,
    pub daily_wage: u32,
    pub experience_years: u32,
    pub is_available_today: bool,
    pub last_available_update: Timestamp,
    pub status: WorkerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(flatten)]
    pub rating: RatingTally,
}

impl WorkerProfile {
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == WorkerStatus::Approved
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    #[serde(flatten)]
    pub account: Account,
    pub area: String,
    #[serde(flatten)]
    pub rating: RatingTally,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(flatten)]
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Worker(WorkerProfile),
    Employer(EmployerProfile),
    Admin(AdminProfile),
}

impl User {
    #[must_use]
    pub const fn account(&self) -> &Account {
        match self {
            Self::Worker(w) => &w.account,
            Self::Employer(e) => &e.account,
            Self::Admin(a) => &a.account,
        }
    }

    pub fn account_mut(&mut self) -> &mut Account {
        match self {
            Self::Worker(w) => &mut w.account,
            Self::Employer(e) => &mut e.account,
            Self::Admin(a) => &mut a.account,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.account().id
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.account().phone
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.account().name
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Worker(_) => Role::Worker,
            Self::Employer(_) => Role::Employer,
            Self::Admin(_) => Role::Admin,
        }
    }

    /// Rating tally for rateable roles; admins have none.
    #[must_use]
    pub const fn rating(&self) -> Option<&RatingTally> {
        match self {
            Self::Worker(w) => Some(&w.rating),
            Self::Employer(e) => Some(&e.rating),
            Self::Admin(_) => None,
        }
    }

    pub fn rating_mut(&mut self) -> Option<&mut RatingTally> {
        match self {
            Self::Worker(w) => Some(&mut w.rating),
            Self::Employer(e) => Some(&mut e.rating),
            Self::Admin(_) => None,
        }
    }

    #[must_use]
    pub fn area(&self) -> Option<&str> {
        match self {
            Self::Worker(w) => Some(&w.area),
            Self::Employer(e) => Some(&e.area),
            Self::Admin(_) => None,
        }
    }

    #[must_use]
    pub const fn as_worker(&self) -> Option<&WorkerProfile> {
        match self {
            Self::Worker(w) => Some(w),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_employer(&self) -> Option<&EmployerProfile> {
        match self {
            Self::Employer(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_worker(self) -> Option<WorkerProfile> {
        match self {
            Self::Worker(w) => Some(w),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_employer(self) -> Option<EmployerProfile> {
        match self {
            Self::Employer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorkerProfile> for User {
    fn from(worker: WorkerProfile) -> Self {
        Self::Worker(worker)
    }
}

impl From<EmployerProfile> for User {
    fn from(employer: EmployerProfile) -> Self {
        Self::Employer(employer)
    }
}

impl From<AdminProfile> for User {
    fn from(admin: AdminProfile) -> Self {
        Self::Admin(admin)
    }
}
