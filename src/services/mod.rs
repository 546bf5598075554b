pub mod validation;

pub mod auth_service;
pub use auth_service::{
    AuthError, AuthService, EmployerRegistration, Registration, WorkerRegistration,
};

pub mod auth_service_impl;
pub use auth_service_impl::StoreAuthService;

pub mod registration;
pub use registration::{AuthScreen, RegisterRole, RegistrationFlow, RegistrationForm};

pub mod admin_service;
pub use admin_service::{AdminError, AdminService, NewWorker};

pub mod admin_service_impl;
pub use admin_service_impl::StoreAdminService;

pub mod employer_service;
pub use employer_service::{EmployerError, EmployerProfileUpdate, EmployerService, NewJob};

pub mod employer_service_impl;
pub use employer_service_impl::StoreEmployerService;

pub mod worker_service;
pub use worker_service::{JobListing, WorkerError, WorkerProfileUpdate, WorkerService};

pub mod worker_service_impl;
pub use worker_service_impl::StoreWorkerService;

pub mod sos;
pub use sos::{SosAlert, SosStatus};
