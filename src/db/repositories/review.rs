use anyhow::Result;
use std::sync::Arc;

use super::Collection;
use crate::db::KeyValueStore;
use crate::models::Review;

pub struct ReviewRepository {
    reviews: Collection<Review>,
}

impl ReviewRepository {
    pub(crate) fn new(backend: Arc<dyn KeyValueStore>, key: String) -> Self {
        Self {
            reviews: Collection::new(backend, key),
        }
    }

    pub fn list(&self) -> Result<Vec<Review>> {
        self.reviews.load()
    }

    pub fn replace_all(&self, reviews: &[Review]) -> Result<()> {
        self.reviews.save(reviews)
    }

    pub fn add(&self, review: Review) -> Result<()> {
        self.reviews.append(review)
    }
}
