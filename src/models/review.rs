use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// A single rating event. Reviews are append-only; their only effect on
/// other records is the rated user's running tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
