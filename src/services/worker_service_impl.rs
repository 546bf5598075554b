//! Store-backed implementation of the `WorkerService` trait.

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::MarketplaceConfig;
use crate::db::Store;
use crate::derivations;
use crate::domain::{Clock, IdPrefix, generate_id, local_date};
use crate::models::{Review, User, WorkerProfile};
use crate::services::validation::{
    optional_text, require_positive, require_text, validate_rating,
};
use crate::services::worker_service::{
    JobListing, WorkerError, WorkerProfileUpdate, WorkerService,
};

pub struct StoreWorkerService {
    store: Store,
    clock: Arc<dyn Clock>,
    config: MarketplaceConfig,
}

impl StoreWorkerService {
    #[must_use]
    pub fn new(store: Store, clock: Arc<dyn Clock>, config: MarketplaceConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    fn load_worker(&self, worker_id: &str) -> Result<WorkerProfile, WorkerError> {
        self.store
            .find_user(worker_id)?
            .and_then(User::into_worker)
            .ok_or_else(|| WorkerError::WorkerNotFound(worker_id.to_string()))
    }

    fn save(&self, worker: &WorkerProfile) -> Result<(), WorkerError> {
        if !self.store.update_user(User::Worker(worker.clone()))? {
            return Err(WorkerError::WorkerNotFound(worker.account.id.clone()));
        }
        Ok(())
    }
}

impl WorkerService for StoreWorkerService {
    fn find_work(&self, worker_id: &str) -> Result<Vec<JobListing>, WorkerError> {
        let worker = self.load_worker(worker_id)?;
        let jobs = self.store.get_jobs()?;
        let now = self.clock.now();
        let window = self.config.urgent_window_millis();

        Ok(derivations::find_work(&jobs, &worker.area)
            .into_iter()
            .map(|job| JobListing {
                urgent: derivations::is_urgent(&job, now, window),
                job,
            })
            .collect())
    }

    fn toggle_availability(&self, worker_id: &str) -> Result<WorkerProfile, WorkerError> {
        let mut worker = self.load_worker(worker_id)?;
        if !worker.is_approved() {
            return Err(WorkerError::NotApproved(worker.status));
        }

        worker.is_available_today = !worker.is_available_today;
        worker.last_available_update = self.clock.now();
        self.save(&worker)?;

        info!(
            id = worker_id,
            available = worker.is_available_today,
            "Availability toggled"
        );
        Ok(worker)
    }

    fn refresh_daily_availability(&self, worker_id: &str) -> Result<bool, WorkerError> {
        let mut worker = self.load_worker(worker_id)?;
        if !worker.is_available_today
            || local_date(worker.last_available_update) >= self.clock.today()
        {
            return Ok(false);
        }

        worker.is_available_today = false;
        self.save(&worker)?;
        debug!(id = worker_id, "Reset stale availability");
        Ok(true)
    }

    fn rate_employer(
        &self,
        worker_id: &str,
        employer_id: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Review, WorkerError> {
        let rating = validate_rating(rating).map_err(WorkerError::Validation)?;
        let worker = self.load_worker(worker_id)?;
        if self
            .store
            .find_user(employer_id)?
            .and_then(User::into_employer)
            .is_none()
        {
            return Err(WorkerError::EmployerNotFound(employer_id.to_string()));
        }

        let now = self.clock.now();
        let reviews = self.store.get_reviews()?;
        let review = Review {
            id: generate_id(IdPrefix::Review, now, |candidate| {
                reviews.iter().any(|r| r.id == candidate)
            }),
            from_id: worker.account.id,
            to_id: employer_id.to_string(),
            rating,
            comment: optional_text(comment),
            created_at: now,
        };

        self.store.add_review(review.clone())?;
        Ok(review)
    }

    fn update_profile(
        &self,
        worker_id: &str,
        update: WorkerProfileUpdate,
    ) -> Result<WorkerProfile, WorkerError> {
        let mut worker = self.load_worker(worker_id)?;

        if let Some(name) = update.name {
            worker.account.name = require_text(&name, "Name")
                .map_err(WorkerError::Validation)?
                .to_string();
        }
        if let Some(area) = update.area {
            worker.area = require_text(&area, "Area")
                .map_err(WorkerError::Validation)?
                .to_string();
        }
        if let Some(wage) = update.daily_wage {
            worker.daily_wage =
                require_positive(wage, "Daily wage").map_err(WorkerError::Validation)?;
        }
        if let Some(years) = update.experience_years {
            worker.experience_years = years;
        }
        if let Some(bio) = update.bio {
            worker.account.bio = optional_text(Some(bio));
        }

        self.save(&worker)?;
        info!(id = worker_id, "Worker profile updated");
        Ok(worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedClock, MILLIS_PER_DAY, MILLIS_PER_HOUR};
    use crate::models::WorkerStatus;

    const SEEDED_AT: i64 = 1_700_000_000_000;

    fn service() -> (StoreWorkerService, Store, Arc<FixedClock>) {
        let store = Store::in_memory();
        store.seed_if_empty(SEEDED_AT).unwrap();
        let clock = Arc::new(FixedClock::new(SEEDED_AT));
        let svc = StoreWorkerService::new(
            store.clone(),
            clock.clone(),
            MarketplaceConfig::default(),
        );
        (svc, store, clock)
    }

    #[test]
    fn feed_puts_own_area_first_and_flags_urgent() {
        let (svc, _, _) = service();
        // w3 lives in Malviya Nagar, where j2 was posted two hours ago.
        let feed = svc.find_work("w3").unwrap();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].job.id, "j2");
        assert!(!feed[0].urgent);

        let j5 = feed.iter().find(|l| l.job.id == "j5").unwrap();
        assert!(j5.urgent);
        let j3 = feed.iter().find(|l| l.job.id == "j3").unwrap();
        assert!(!j3.urgent);

        // Reading again without writes yields the same feed.
        assert_eq!(svc.find_work("w3").unwrap(), feed);
    }

    #[test]
    fn toggle_flips_and_stamps() {
        let (svc, store, clock) = service();
        clock.advance(MILLIS_PER_HOUR);

        let worker = svc.toggle_availability("w1").unwrap();
        assert!(!worker.is_available_today);
        assert_eq!(worker.last_available_update, SEEDED_AT + MILLIS_PER_HOUR);

        let stored = store.find_user("w1").unwrap().unwrap();
        assert!(!stored.as_worker().unwrap().is_available_today);

        assert!(svc.toggle_availability("w1").unwrap().is_available_today);
    }

    #[test]
    fn pending_worker_cannot_toggle() {
        let (svc, store, _) = service();
        let mut user = store.find_user("w2").unwrap().unwrap();
        if let User::Worker(w) = &mut user {
            w.status = WorkerStatus::Pending;
        }
        store.update_user(user).unwrap();

        assert!(matches!(
            svc.toggle_availability("w2"),
            Err(WorkerError::NotApproved(WorkerStatus::Pending))
        ));
    }

    #[test]
    fn stale_availability_resets_on_a_later_day() {
        let (svc, store, clock) = service();
        assert!(!svc.refresh_daily_availability("w1").unwrap());

        clock.advance(2 * MILLIS_PER_DAY);
        assert!(svc.refresh_daily_availability("w1").unwrap());
        let stored = store.find_user("w1").unwrap().unwrap();
        assert!(!stored.as_worker().unwrap().is_available_today);

        // Already unavailable: nothing to do.
        assert!(!svc.refresh_daily_availability("w1").unwrap());
    }

    #[test]
    fn rating_an_employer() {
        let (svc, store, _) = service();
        let review = svc
            .rate_employer("w1", "e5", 4, Some("Paid on time".to_string()))
            .unwrap();
        assert_eq!(review.comment.as_deref(), Some("Paid on time"));

        let employer = store.find_user("e5").unwrap().unwrap();
        assert_eq!(employer.rating().unwrap().display(), "4.0");

        assert!(matches!(
            svc.rate_employer("w1", "w2", 4, None),
            Err(WorkerError::EmployerNotFound(_))
        ));
        assert!(matches!(
            svc.rate_employer("w1", "e5", 6, None),
            Err(WorkerError::Validation(_))
        ));
    }

    #[test]
    fn profile_update_validates() {
        let (svc, _, _) = service();
        let worker = svc
            .update_profile(
                "w5",
                WorkerProfileUpdate {
                    daily_wage: Some(550),
                    experience_years: Some(3),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(worker.daily_wage, 550);
        assert_eq!(worker.experience_years, 3);
        assert_eq!(worker.area, "Sodala");

        let bad = WorkerProfileUpdate {
            daily_wage: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            svc.update_profile("w5", bad),
            Err(WorkerError::Validation(_))
        ));
    }
}
