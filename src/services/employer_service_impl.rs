//! Store-backed implementation of the `EmployerService` trait.

use std::sync::Arc;
use tracing::info;

use crate::db::Store;
use crate::derivations::{self, WorkerFilter};
use crate::domain::{Clock, IdPrefix, generate_id};
use crate::models::{EmployerProfile, JobPost, JobStatus, Review, User, WorkerProfile};
use crate::services::employer_service::{
    EmployerError, EmployerProfileUpdate, EmployerService, NewJob,
};
use crate::services::validation::{
    optional_text, require_positive, require_text, validate_rating,
};

pub struct StoreEmployerService {
    store: Store,
    clock: Arc<dyn Clock>,
}

impl StoreEmployerService {
    #[must_use]
    pub fn new(store: Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn load_employer(&self, employer_id: &str) -> Result<EmployerProfile, EmployerError> {
        self.store
            .find_user(employer_id)?
            .and_then(User::into_employer)
            .ok_or_else(|| EmployerError::EmployerNotFound(employer_id.to_string()))
    }
}

impl EmployerService for StoreEmployerService {
    fn find_workers(&self, filter: &WorkerFilter) -> Result<Vec<WorkerProfile>, EmployerError> {
        let users = self.store.get_users()?;
        Ok(derivations::find_workers(&users, filter))
    }

    fn post_job(&self, employer_id: &str, job: NewJob) -> Result<JobPost, EmployerError> {
        let employer = self.load_employer(employer_id)?;

        let fill_all = || EmployerError::Validation("Please fill all fields".to_string());
        let payment = require_positive(job.payment, "Payment").map_err(|_| fill_all())?;
        let date_needed = require_text(&job.date_needed, "Date").map_err(|_| fill_all())?;
        let workers_needed = require_positive(job.workers_needed, "Workers needed")
            .map_err(EmployerError::Validation)?;
        let area = optional_text(job.area).unwrap_or_else(|| employer.area.clone());

        let now = self.clock.now();
        let jobs = self.store.get_jobs()?;
        let id = generate_id(IdPrefix::Job, now, |candidate| {
            jobs.iter().any(|j| j.id == candidate)
        });

        let post = JobPost {
            id,
            employer_id: employer.account.id.clone(),
            employer_name: employer.account.name.clone(),
            job_type: job.job_type,
            area,
            workers_needed,
            payment,
            date_needed: date_needed.to_string(),
            description: optional_text(job.description),
            created_at: now,
            status: JobStatus::Active,
        };

        self.store.add_job(post.clone())?;
        Ok(post)
    }

    fn my_jobs(&self, employer_id: &str) -> Result<Vec<JobPost>, EmployerError> {
        let jobs = self.store.get_jobs()?;
        Ok(derivations::employer_jobs(&jobs, employer_id))
    }

    fn delete_job(&self, employer_id: &str, job_id: &str) -> Result<(), EmployerError> {
        let job = self
            .store
            .find_job(job_id)?
            .ok_or_else(|| EmployerError::JobNotFound(job_id.to_string()))?;

        if job.employer_id != employer_id {
            return Err(EmployerError::NotJobOwner(job_id.to_string()));
        }

        self.store.delete_job(job_id)?;
        Ok(())
    }

    fn rate_worker(
        &self,
        employer_id: &str,
        worker_id: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Review, EmployerError> {
        let rating = validate_rating(rating).map_err(EmployerError::Validation)?;
        let employer = self.load_employer(employer_id)?;
        if self
            .store
            .find_user(worker_id)?
            .and_then(User::into_worker)
            .is_none()
        {
            return Err(EmployerError::WorkerNotFound(worker_id.to_string()));
        }

        let now = self.clock.now();
        let reviews = self.store.get_reviews()?;
        let review = Review {
            id: generate_id(IdPrefix::Review, now, |candidate| {
                reviews.iter().any(|r| r.id == candidate)
            }),
            from_id: employer.account.id,
            to_id: worker_id.to_string(),
            rating,
            comment: optional_text(comment),
            created_at: now,
        };

        self.store.add_review(review.clone())?;
        Ok(review)
    }

    fn update_profile(
        &self,
        employer_id: &str,
        update: EmployerProfileUpdate,
    ) -> Result<EmployerProfile, EmployerError> {
        let mut employer = self.load_employer(employer_id)?;

        if let Some(name) = update.name {
            employer.account.name = require_text(&name, "Name")
                .map_err(EmployerError::Validation)?
                .to_string();
        }
        if let Some(area) = update.area {
            employer.area = require_text(&area, "Area")
                .map_err(EmployerError::Validation)?
                .to_string();
        }
        if let Some(bio) = update.bio {
            employer.account.bio = optional_text(Some(bio));
        }

        if !self.store.update_user(User::Employer(employer.clone()))? {
            return Err(EmployerError::EmployerNotFound(employer_id.to_string()));
        }

        info!(id = employer_id, "Employer profile updated");
        Ok(employer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use crate::models::Skill;

    fn service() -> (StoreEmployerService, Store) {
        let store = Store::in_memory();
        store.seed_if_empty(1_000_000).unwrap();
        let svc = StoreEmployerService::new(store.clone(), Arc::new(FixedClock::new(2_000_000)));
        (svc, store)
    }

    fn new_job() -> NewJob {
        NewJob {
            job_type: Skill::Plumber,
            area: None,
            workers_needed: 2,
            payment: 700,
            date_needed: "Tomorrow".to_string(),
            description: Some("Bathroom fitting".to_string()),
        }
    }

    #[test]
    fn post_job_snapshots_employer() {
        let (svc, _) = service();
        let job = svc.post_job("e3", new_job()).unwrap();
        assert_eq!(job.id, "j_2000000");
        assert_eq!(job.employer_name, "Jaipur Constructions");
        assert_eq!(job.area, "Mansarovar");
        assert!(svc.my_jobs("e3").unwrap().iter().any(|j| j.id == job.id));
    }

    #[test]
    fn renaming_employer_keeps_old_job_name() {
        let (svc, store) = service();
        let job = svc.post_job("e4", new_job()).unwrap();
        svc.update_profile(
            "e4",
            EmployerProfileUpdate {
                name: Some("Rahul Sweets & Namkeen".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let stored = store.find_job(&job.id).unwrap().unwrap();
        assert_eq!(stored.employer_name, "Rahul Sweet Shop");
    }

    #[test]
    fn post_job_validation() {
        let (svc, store) = service();
        let mut job = new_job();
        job.payment = 0;
        assert!(matches!(svc.post_job("e1", job), Err(EmployerError::Validation(_))));

        let mut job = new_job();
        job.date_needed = "  ".to_string();
        assert!(svc.post_job("e1", job).is_err());

        assert!(matches!(
            svc.post_job("w1", new_job()),
            Err(EmployerError::EmployerNotFound(_))
        ));
        assert_eq!(store.get_jobs().unwrap().len(), 5);
    }

    #[test]
    fn delete_job_only_own() {
        let (svc, store) = service();
        assert!(matches!(
            svc.delete_job("e2", "j1"),
            Err(EmployerError::NotJobOwner(_))
        ));
        svc.delete_job("e1", "j1").unwrap();
        assert!(store.find_job("j1").unwrap().is_none());
        assert!(svc.my_jobs("e1").unwrap().is_empty());
        assert!(matches!(
            svc.delete_job("e1", "j1"),
            Err(EmployerError::JobNotFound(_))
        ));
    }

    #[test]
    fn rating_a_worker_updates_tally() {
        let (svc, store) = service();
        let review = svc.rate_worker("e1", "w1", 5, None).unwrap();
        assert_eq!(review.id, "r_2000000");

        let worker = store.find_user("w1").unwrap().unwrap();
        assert_eq!(worker.rating().unwrap().rating_sum, 28);
        assert_eq!(worker.rating().unwrap().rating_count, 6);

        assert!(svc.rate_worker("e1", "w1", 0, None).is_err());
        assert!(matches!(
            svc.rate_worker("e1", "e2", 4, None),
            Err(EmployerError::WorkerNotFound(_))
        ));
    }

    #[test]
    fn find_workers_hides_suspended() {
        let (svc, store) = service();
        let mut user = store.find_user("w6").unwrap().unwrap();
        if let User::Worker(w) = &mut user {
            w.status = crate::models::WorkerStatus::Suspended;
        }
        store.update_user(user).unwrap();

        let filter = WorkerFilter {
            skill: Some("plumb".to_string()),
            area: None,
        };
        assert!(svc.find_workers(&filter).unwrap().is_empty());
    }
}
