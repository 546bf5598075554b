use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::Timestamp;
use crate::models::{JobPost, Review, User};

pub mod backend;
pub mod repositories;
pub mod seed;

pub use backend::{FileStore, KeyValueStore, MemoryStore};

const KEY_PREFIX: &str = "kaamchowk";
pub const DEFAULT_NAMESPACE_VERSION: u32 = 3;

/// Version-tagged key names. Bumping the version points every key at a fresh
/// slot, leaving earlier data unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    version: u32,
}

impl Namespace {
    #[must_use]
    pub const fn new(version: u32) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn key(&self, name: &str) -> String {
        format!("{KEY_PREFIX}_{name}_v{}", self.version)
    }

    #[must_use]
    pub fn users(&self) -> String {
        self.key("users")
    }

    #[must_use]
    pub fn jobs(&self) -> String {
        self.key("jobs")
    }

    #[must_use]
    pub fn reviews(&self) -> String {
        self.key("reviews")
    }

    #[must_use]
    pub fn current_user(&self) -> String {
        self.key("current_user_id")
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE_VERSION)
    }
}

/// Handle over the users, jobs and reviews collections plus the session
/// pointer. Cloning shares the same backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
    namespace: Namespace,
}

impl Store {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>, namespace: Namespace) -> Self {
        Self { backend, namespace }
    }

    /// Empty, unseeded store on a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Namespace::default())
    }

    /// Opens the configured backend and seeds it when no users exist yet.
    pub fn open(config: &StorageConfig, now: Timestamp) -> Result<Self> {
        let backend: Arc<dyn KeyValueStore> = match config.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => Arc::new(FileStore::new(&config.data_dir)?),
        };

        let store = Self::new(backend, Namespace::new(config.namespace_version));
        if config.seed_on_first_run {
            store.seed_if_empty(now)?;
        }

        info!(
            "Store opened ({:?} backend, namespace v{})",
            config.backend, config.namespace_version
        );
        Ok(store)
    }

    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Writes the fixture collections if the users collection has never been
    /// written. Returns whether seeding happened.
    pub fn seed_if_empty(&self, now: Timestamp) -> Result<bool> {
        if self.user_repo().exists()? {
            return Ok(false);
        }

        let users = seed::users(now);
        let jobs = seed::jobs(now);
        self.user_repo().replace_all(&users)?;
        self.job_repo().replace_all(&jobs)?;
        self.review_repo().replace_all(&[])?;

        info!(
            "Seeded store with {} users and {} jobs",
            users.len(),
            jobs.len()
        );
        Ok(true)
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.backend.clone(), self.namespace.users())
    }

    fn job_repo(&self) -> repositories::job::JobRepository {
        repositories::job::JobRepository::new(self.backend.clone(), self.namespace.jobs())
    }

    fn review_repo(&self) -> repositories::review::ReviewRepository {
        repositories::review::ReviewRepository::new(self.backend.clone(), self.namespace.reviews())
    }

    fn session_repo(&self) -> repositories::session::SessionRepository {
        repositories::session::SessionRepository::new(
            self.backend.clone(),
            self.namespace.current_user(),
        )
    }

    // Users

    pub fn get_users(&self) -> Result<Vec<User>> {
        self.user_repo().list()
    }

    pub fn set_users(&self, users: &[User]) -> Result<()> {
        self.user_repo().replace_all(users)
    }

    pub fn add_user(&self, user: User) -> Result<()> {
        self.user_repo().add(user)
    }

    /// Replaces the user with the same id; `Ok(false)` if there is none.
    pub fn update_user(&self, user: User) -> Result<bool> {
        self.user_repo().update(user)
    }

    pub fn delete_user(&self, id: &str) -> Result<bool> {
        self.user_repo().remove(id)
    }

    pub fn find_user(&self, id: &str) -> Result<Option<User>> {
        self.user_repo().get(id)
    }

    pub fn find_user_by_phone(&self, phone: &str) -> Result<Option<User>> {
        self.user_repo().get_by_phone(phone)
    }

    // Jobs

    pub fn get_jobs(&self) -> Result<Vec<JobPost>> {
        self.job_repo().list()
    }

    pub fn set_jobs(&self, jobs: &[JobPost]) -> Result<()> {
        self.job_repo().replace_all(jobs)
    }

    pub fn add_job(&self, job: JobPost) -> Result<()> {
        self.job_repo().add(job)
    }

    pub fn delete_job(&self, id: &str) -> Result<bool> {
        self.job_repo().remove(id)
    }

    pub fn find_job(&self, id: &str) -> Result<Option<JobPost>> {
        self.job_repo().get(id)
    }

    // Reviews

    pub fn get_reviews(&self) -> Result<Vec<Review>> {
        self.review_repo().list()
    }

    /// Appends the review and folds its rating into the target's tally.
    ///
    /// Both collections are read before anything is written, so a failed
    /// read leaves the store untouched. The tally update is skipped when the
    /// target is missing or is an admin. Repeated calls for the same event
    /// count again each time.
    pub fn add_review(&self, review: Review) -> Result<()> {
        let user_repo = self.user_repo();
        let review_repo = self.review_repo();

        let mut users = user_repo.list()?;
        let mut reviews = review_repo.list()?;

        let to_id = review.to_id.clone();
        let rating = review.rating;
        let applied =
            repositories::user::UserRepository::record_rating(&mut users, &to_id, rating);

        reviews.push(review);
        review_repo.replace_all(&reviews)?;
        if applied {
            user_repo.replace_all(&users)?;
        }

        info!(to = %to_id, rating, applied, "Recorded review");
        Ok(())
    }

    // Session

    /// Resolves the session pointer; `None` if unset or pointing at a
    /// user that no longer exists.
    pub fn get_current_user(&self) -> Result<Option<User>> {
        match self.session_repo().get()? {
            Some(id) => self.user_repo().get(&id),
            None => Ok(None),
        }
    }

    pub fn set_current_user(&self, id: Option<&str>) -> Result<()> {
        self.session_repo().set(id)
    }
}
