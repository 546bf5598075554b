use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::Collection;
use crate::db::KeyValueStore;
use crate::models::JobPost;

pub struct JobRepository {
    jobs: Collection<JobPost>,
}

impl JobRepository {
    pub(crate) fn new(backend: Arc<dyn KeyValueStore>, key: String) -> Self {
        Self {
            jobs: Collection::new(backend, key),
        }
    }

    pub fn list(&self) -> Result<Vec<JobPost>> {
        self.jobs.load()
    }

    pub fn replace_all(&self, jobs: &[JobPost]) -> Result<()> {
        self.jobs.save(jobs)
    }

    pub fn add(&self, job: JobPost) -> Result<()> {
        info!(id = %job.id, employer = %job.employer_id, "Posting job");
        self.jobs.append(job)
    }

    pub fn get(&self, id: &str) -> Result<Option<JobPost>> {
        Ok(self.jobs.load()?.into_iter().find(|j| j.id == id))
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut jobs = self.jobs.load()?;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        let removed = jobs.len() != before;

        self.jobs.save(&jobs)?;
        if removed {
            info!(id, "Deleted job");
        }
        Ok(removed)
    }
}
