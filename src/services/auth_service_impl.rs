//! Store-backed implementation of the `AuthService` trait.

use std::sync::Arc;
use tracing::info;

use crate::config::MarketplaceConfig;
use crate::db::Store;
use crate::domain::{Clock, IdPrefix, generate_id};
use crate::models::user::ADMIN_ID;
use crate::models::{Account, EmployerProfile, RatingTally, User, WorkerProfile, WorkerStatus};
use crate::services::auth_service::{
    AuthError, AuthService, EmployerRegistration, Registration, WorkerRegistration,
};
use crate::services::validation::{optional_text, require_text, validate_phone};

pub struct StoreAuthService {
    store: Store,
    clock: Arc<dyn Clock>,
    config: MarketplaceConfig,
}

impl StoreAuthService {
    #[must_use]
    pub fn new(store: Store, clock: Arc<dyn Clock>, config: MarketplaceConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    fn fresh_id(&self, prefix: IdPrefix) -> Result<String, AuthError> {
        let users = self.store.get_users()?;
        Ok(generate_id(prefix, self.clock.now(), |candidate| {
            users.iter().any(|u| u.id() == candidate)
        }))
    }

    fn starting_rating(&self) -> RatingTally {
        RatingTally::new(
            self.config.starting_rating_sum,
            self.config.starting_rating_count,
        )
    }

    fn build_worker(&self, form: WorkerRegistration) -> Result<User, AuthError> {
        let name = require_text(&form.name, "Name").map_err(AuthError::Validation)?;
        let phone = validate_phone(&form.phone).map_err(AuthError::Validation)?;
        let area = require_text(&form.area, "Area").map_err(AuthError::Validation)?;
        let skill = form
            .skill
            .ok_or_else(|| AuthError::Validation("Skill is required".to_string()))?;

        let now = self.clock.now();
        let id = self.fresh_id(IdPrefix::Worker)?;
        let photo_url = optional_text(form.photo_url)
            .unwrap_or_else(|| format!("https://picsum.photos/200/200?random={now}"));

        Ok(User::Worker(WorkerProfile {
            account: Account {
                id,
                phone: phone.to_string(),
                name: name.to_string(),
                created_at: now,
                password: Some(self.config.default_password.clone()),
                bio: optional_text(form.bio),
            },
            photo_url,
            id_proof_url: optional_text(form.id_proof_url),
            skills: vec![skill],
            area: area.to_string(),
            daily_wage: form
                .daily_wage
                .filter(|w| *w > 0)
                .unwrap_or(self.config.registration_wage),
            experience_years: form
                .experience_years
                .unwrap_or(self.config.registration_experience),
            is_available_today: true,
            last_available_update: now,
            status: WorkerStatus::Pending,
            rejection_reason: None,
            rating: self.starting_rating(),
        }))
    }

    fn build_employer(&self, form: EmployerRegistration) -> Result<User, AuthError> {
        let name = require_text(&form.name, "Name").map_err(AuthError::Validation)?;
        let phone = validate_phone(&form.phone).map_err(AuthError::Validation)?;
        let area = require_text(&form.area, "Area").map_err(AuthError::Validation)?;

        Ok(User::Employer(EmployerProfile {
            account: Account {
                id: self.fresh_id(IdPrefix::Employer)?,
                phone: phone.to_string(),
                name: name.to_string(),
                created_at: self.clock.now(),
                password: Some(self.config.default_password.clone()),
                bio: optional_text(form.bio),
            },
            area: area.to_string(),
            rating: self.starting_rating(),
        }))
    }
}

impl AuthService for StoreAuthService {
    fn login(&self, phone: &str) -> Result<User, AuthError> {
        let phone = phone.trim();

        let user = if phone == self.config.admin_phone {
            self.store
                .find_user(ADMIN_ID)?
                .ok_or(AuthError::AdminMissing)?
        } else {
            self.store
                .find_user_by_phone(phone)?
                .ok_or(AuthError::UserNotFound)?
        };

        self.store.set_current_user(Some(user.id()))?;
        info!(id = user.id(), role = %user.role(), "Logged in");
        Ok(user)
    }

    fn logout(&self) -> Result<(), AuthError> {
        self.store.set_current_user(None)?;
        info!("Logged out");
        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.store.get_current_user()?)
    }

    fn register(&self, registration: Registration) -> Result<User, AuthError> {
        let user = match registration {
            Registration::Worker(form) => self.build_worker(form)?,
            Registration::Employer(form) => self.build_employer(form)?,
        };

        self.store.add_user(user.clone())?;
        self.store.set_current_user(Some(user.id()))?;
        info!(id = user.id(), role = %user.role(), "Registered new account");
        Ok(user)
    }
}
