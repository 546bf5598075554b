//! Domain service for login, logout and self-registration.
//!
//! Login is by phone number only. The password stored on an account is
//! never compared against anything.

use thiserror::Error;

use crate::models::{Skill, User};

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found. Please register first.")]
    UserNotFound,

    #[error("Admin user missing.")]
    AdminMissing,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Completed worker sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerRegistration {
    pub name: String,
    pub phone: String,
    pub skill: Option<Skill>,
    pub daily_wage: Option<u32>,
    pub experience_years: Option<u32>,
    pub area: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub id_proof_url: Option<String>,
}

/// Completed employer sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployerRegistration {
    pub name: String,
    pub phone: String,
    pub area: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Worker(WorkerRegistration),
    Employer(EmployerRegistration),
}

/// Domain service trait for authentication.
pub trait AuthService: Send + Sync {
    /// Resolves `phone` to a user and makes it the active session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserNotFound`] if no account has that phone.
    fn login(&self, phone: &str) -> Result<User, AuthError>;

    fn logout(&self) -> Result<(), AuthError>;

    /// The logged-in user, if the session points at an existing account.
    fn current_user(&self) -> Result<Option<User>, AuthError>;

    /// Creates the account and logs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] when a required field is missing; nothing is written.
    fn register(&self, registration: Registration) -> Result<User, AuthError>;
}
