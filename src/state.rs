use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::domain::{Clock, SystemClock};
use crate::models::User;
use crate::services::{
    AdminService, AuthService, EmployerService, SosAlert, StoreAdminService, StoreAuthService,
    StoreEmployerService, StoreWorkerService, WorkerService,
};

/// Everything a command needs: the opened store plus one handle per
/// dashboard service, all sharing the same store and clock.
#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub store: Store,

    pub clock: Arc<dyn Clock>,

    pub auth: Arc<dyn AuthService>,

    pub admin: Arc<dyn AdminService>,

    pub employer: Arc<dyn EmployerService>,

    pub worker: Arc<dyn WorkerService>,
}

impl SharedState {
    /// Opens the configured store on the system clock.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let store = Store::open(&config.storage, clock.now())?;
        Ok(Self::with_store(config, store, clock))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store, clock: Arc<dyn Clock>) -> Self {
        let marketplace = config.marketplace.clone();

        let auth = Arc::new(StoreAuthService::new(
            store.clone(),
            clock.clone(),
            marketplace.clone(),
        ));
        let admin = Arc::new(StoreAdminService::new(
            store.clone(),
            clock.clone(),
            marketplace.clone(),
        ));
        let employer = Arc::new(StoreEmployerService::new(store.clone(), clock.clone()));
        let worker = Arc::new(StoreWorkerService::new(
            store.clone(),
            clock.clone(),
            marketplace,
        ));

        Self {
            config,
            store,
            clock,
            auth,
            admin,
            employer,
            worker,
        }
    }

    /// The logged-in user, if the session points at one.
    pub fn current_user(&self) -> anyhow::Result<Option<User>> {
        self.store.get_current_user()
    }

    /// A fresh alert addressed to the admin phone.
    #[must_use]
    pub fn sos_alert(&self) -> SosAlert {
        SosAlert::new(&self.config.sos, self.config.marketplace.admin_phone.clone())
    }
}
