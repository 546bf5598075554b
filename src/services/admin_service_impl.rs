//! Store-backed implementation of the `AdminService` trait.

use std::sync::Arc;
use tracing::info;

use crate::config::MarketplaceConfig;
use crate::db::Store;
use crate::derivations;
use crate::domain::{Clock, IdPrefix, generate_id};
use crate::models::{Account, RatingTally, User, WorkerProfile, WorkerStatus};
use crate::services::admin_service::{AdminError, AdminService, NewWorker};
use crate::services::validation::{optional_text, require_text, validate_phone};

pub struct StoreAdminService {
    store: Store,
    clock: Arc<dyn Clock>,
    config: MarketplaceConfig,
}

impl StoreAdminService {
    #[must_use]
    pub fn new(store: Store, clock: Arc<dyn Clock>, config: MarketplaceConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    fn load_worker(&self, worker_id: &str) -> Result<WorkerProfile, AdminError> {
        self.store
            .find_user(worker_id)?
            .and_then(User::into_worker)
            .ok_or_else(|| AdminError::WorkerNotFound(worker_id.to_string()))
    }

    fn transition(
        &self,
        worker_id: &str,
        to: WorkerStatus,
        reason: Option<String>,
    ) -> Result<WorkerProfile, AdminError> {
        let mut worker = self.load_worker(worker_id)?;
        let from = worker.status;

        if !from.can_transition_to(to) {
            return Err(AdminError::InvalidTransition { from, to });
        }

        worker.status = to;
        worker.rejection_reason = match to {
            WorkerStatus::Rejected => optional_text(reason),
            _ => None,
        };

        if !self.store.update_user(User::Worker(worker.clone()))? {
            return Err(AdminError::WorkerNotFound(worker_id.to_string()));
        }

        info!(id = worker_id, %from, %to, "Worker status changed");
        Ok(worker)
    }
}

impl AdminService for StoreAdminService {
    fn pending_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError> {
        let users = self.store.get_users()?;
        Ok(derivations::pending_workers(&users, search))
    }

    fn active_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError> {
        let users = self.store.get_users()?;
        Ok(derivations::active_workers(&users, search))
    }

    fn suspended_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError> {
        let users = self.store.get_users()?;
        Ok(derivations::workers_with_status(
            &users,
            search,
            WorkerStatus::Suspended,
        ))
    }

    fn rejected_workers(&self, search: &str) -> Result<Vec<WorkerProfile>, AdminError> {
        let users = self.store.get_users()?;
        Ok(derivations::workers_with_status(
            &users,
            search,
            WorkerStatus::Rejected,
        ))
    }

    fn approve(&self, worker_id: &str) -> Result<WorkerProfile, AdminError> {
        self.transition(worker_id, WorkerStatus::Approved, None)
    }

    fn reject(
        &self,
        worker_id: &str,
        reason: Option<String>,
    ) -> Result<WorkerProfile, AdminError> {
        self.transition(worker_id, WorkerStatus::Rejected, reason)
    }

    fn suspend(&self, worker_id: &str) -> Result<WorkerProfile, AdminError> {
        self.transition(worker_id, WorkerStatus::Suspended, None)
    }

    fn delete_worker(&self, worker_id: &str) -> Result<(), AdminError> {
        self.load_worker(worker_id)?;
        self.store.delete_user(worker_id)?;
        info!(id = worker_id, "Worker deleted by admin");
        Ok(())
    }

    fn add_worker(&self, worker: NewWorker) -> Result<WorkerProfile, AdminError> {
        let missing = || AdminError::Validation("Missing fields".to_string());
        let name = require_text(&worker.name, "Name").map_err(|_| missing())?;
        let phone = require_text(&worker.phone, "Phone").map_err(|_| missing())?;
        let area = require_text(&worker.area, "Area").map_err(|_| missing())?;
        validate_phone(phone).map_err(AdminError::Validation)?;
        if worker.skills.is_empty() {
            return Err(AdminError::Validation(
                "At least one skill is required".to_string(),
            ));
        }

        let now = self.clock.now();
        let users = self.store.get_users()?;
        let id = generate_id(IdPrefix::Worker, now, |candidate| {
            users.iter().any(|u| u.id() == candidate)
        });

        let profile = WorkerProfile {
            account: Account {
                id,
                phone: phone.to_string(),
                name: name.to_string(),
                created_at: now,
                password: Some(self.config.default_password.clone()),
                bio: None,
            },
            photo_url: optional_text(worker.photo_url)
                .unwrap_or_else(|| format!("https://picsum.photos/200/200?random={now}")),
            id_proof_url: None,
            skills: worker.skills,
            area: area.to_string(),
            daily_wage: worker
                .daily_wage
                .filter(|w| *w > 0)
                .unwrap_or(self.config.admin_added_wage),
            experience_years: worker.experience_years.unwrap_or(0),
            is_available_today: true,
            last_available_update: now,
            status: WorkerStatus::Approved,
            rejection_reason: None,
            rating: RatingTally::new(
                self.config.starting_rating_sum,
                self.config.starting_rating_count,
            ),
        };

        self.store.add_user(User::Worker(profile.clone()))?;
        info!(id = %profile.account.id, "Worker added by admin");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use crate::models::Skill;

    fn service() -> (StoreAdminService, Store) {
        let store = Store::in_memory();
        store.seed_if_empty(1_000).unwrap();
        let svc = StoreAdminService::new(
            store.clone(),
            Arc::new(FixedClock::new(9_000)),
            MarketplaceConfig::default(),
        );
        (svc, store)
    }

    fn make_pending(store: &Store, id: &str) {
        let mut user = store.find_user(id).unwrap().unwrap();
        if let User::Worker(w) = &mut user {
            w.status = WorkerStatus::Pending;
        }
        store.update_user(user).unwrap();
    }

    #[test]
    fn approve_moves_worker_between_lists() {
        let (svc, store) = service();
        make_pending(&store, "w3");

        assert_eq!(svc.pending_workers("").unwrap().len(), 1);
        assert!(svc.active_workers("").unwrap().iter().all(|w| w.account.id != "w3"));

        svc.approve("w3").unwrap();
        assert!(svc.pending_workers("").unwrap().is_empty());
        assert!(svc.active_workers("").unwrap().iter().any(|w| w.account.id == "w3"));
    }

    #[test]
    fn suspend_and_reinstate() {
        let (svc, _) = service();
        assert_eq!(svc.suspend("w1").unwrap().status, WorkerStatus::Suspended);
        assert_eq!(svc.approve("w1").unwrap().status, WorkerStatus::Approved);
    }

    #[test]
    fn suspended_and_rejected_workers_stay_listed() {
        let (svc, store) = service();
        svc.suspend("w4").unwrap();
        make_pending(&store, "w5");
        svc.reject("w5", None).unwrap();

        let suspended = svc.suspended_workers("").unwrap();
        assert_eq!(suspended.len(), 1);
        assert_eq!(suspended[0].account.id, "w4");
        assert!(svc.suspended_workers("chotu").unwrap().is_empty());

        let rejected = svc.rejected_workers("chotu").unwrap();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].account.id, "w5");

        svc.approve("w4").unwrap();
        assert!(svc.suspended_workers("").unwrap().is_empty());
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let (svc, store) = service();
        assert!(matches!(
            svc.reject("w1", None),
            Err(AdminError::InvalidTransition { .. })
        ));

        make_pending(&store, "w2");
        let rejected = svc.reject("w2", Some("Blurry ID".to_string())).unwrap();
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Blurry ID"));
        assert!(svc.approve("w2").is_err());
        assert!(svc.suspend("w2").is_err());
    }

    #[test]
    fn moderation_targets_workers_only() {
        let (svc, _) = service();
        assert!(matches!(svc.approve("e1"), Err(AdminError::WorkerNotFound(_))));
        assert!(matches!(svc.delete_worker("admin1"), Err(AdminError::WorkerNotFound(_))));
        assert!(matches!(svc.suspend("nobody"), Err(AdminError::WorkerNotFound(_))));
    }

    #[test]
    fn search_filters_lists() {
        let (svc, _) = service();
        let found = svc.active_workers("imran").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].account.id, "w2");

        assert_eq!(svc.active_workers("98000111").unwrap().len(), 8);
    }

    #[test]
    fn delete_removes_worker() {
        let (svc, store) = service();
        svc.delete_worker("w8").unwrap();
        assert!(store.find_user("w8").unwrap().is_none());
        assert_eq!(svc.active_workers("").unwrap().len(), 7);
    }

    #[test]
    fn added_worker_is_live_immediately() {
        let (svc, _) = service();
        let worker = svc
            .add_worker(NewWorker {
                name: "Pappu".to_string(),
                phone: "9844455566".to_string(),
                area: "Jhotwara".to_string(),
                skills: vec![Skill::Welder],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(worker.account.id, "w_9000");
        assert_eq!(worker.status, WorkerStatus::Approved);
        assert_eq!(worker.daily_wage, 500);
        assert_eq!(worker.experience_years, 0);
        assert!(svc.active_workers("pappu").unwrap().len() == 1);
    }

    #[test]
    fn add_worker_requires_fields() {
        let (svc, store) = service();
        let before = store.get_users().unwrap().len();
        let err = svc
            .add_worker(NewWorker {
                name: "Pappu".to_string(),
                skills: vec![Skill::Welder],
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Missing fields");
        assert_eq!(store.get_users().unwrap().len(), before);
    }
}
