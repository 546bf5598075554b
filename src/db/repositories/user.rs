use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use super::Collection;
use crate::db::KeyValueStore;
use crate::models::User;

pub struct UserRepository {
    users: Collection<User>,
}

impl UserRepository {
    pub(crate) fn new(backend: Arc<dyn KeyValueStore>, key: String) -> Self {
        Self {
            users: Collection::new(backend, key),
        }
    }

    pub fn exists(&self) -> Result<bool> {
        self.users.exists()
    }

    pub fn list(&self) -> Result<Vec<User>> {
        self.users.load()
    }

    pub fn replace_all(&self, users: &[User]) -> Result<()> {
        self.users.save(users)
    }

    /// Appends without checking id or phone uniqueness.
    pub fn add(&self, user: User) -> Result<()> {
        info!(id = user.id(), role = %user.role(), "Adding user");
        self.users.append(user)
    }

    /// Replaces the record with the same id. Returns `false` when none matched.
    pub fn update(&self, user: User) -> Result<bool> {
        let mut users = self.users.load()?;
        let Some(slot) = users.iter_mut().find(|u| u.id() == user.id()) else {
            debug!(id = user.id(), "Update skipped, user not found");
            return Ok(false);
        };

        *slot = user;
        self.users.save(&users)?;
        Ok(true)
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut users = self.users.load()?;
        let before = users.len();
        users.retain(|u| u.id() != id);

        if users.len() == before {
            return Ok(false);
        }

        self.users.save(&users)?;
        info!(id, "Removed user");
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.load()?.into_iter().find(|u| u.id() == id))
    }

    /// First user with an exactly matching phone.
    pub fn get_by_phone(&self, phone: &str) -> Result<Option<User>> {
        Ok(self.users.load()?.into_iter().find(|u| u.phone() == phone))
    }

    /// Folds `rating` into the target's tally within an already loaded
    /// collection. Returns `false` when the target is missing or cannot be
    /// rated, leaving `users` untouched.
    pub fn record_rating(users: &mut [User], to_id: &str, rating: u8) -> bool {
        let Some(tally) = users
            .iter_mut()
            .find(|u| u.id() == to_id)
            .and_then(User::rating_mut)
        else {
            debug!(to_id, "Rating not aggregated, target missing or not rateable");
            return false;
        };

        tally.record(rating);
        true
    }
}
