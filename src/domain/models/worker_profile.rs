use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_READY: &str = "ready";
pub const STATUS_BUSY: &str = "busy";

pub fn is_valid_status(status: &str) -> bool {
    status == STATUS_PENDING || status == STATUS_READY || status == STATUS_BUSY
}

/// One profile per worker user. Availability status has its own endpoint and is
/// never touched by profile edits or by membership approval.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WorkerProfile {
    pub user_id: String,
    pub skills: String,
    pub experience_years: i64,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl WorkerProfile {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            skills: String::new(),
            experience_years: 0,
            location: String::new(),
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Public worker listing row: user + profile + rating aggregates.
#[derive(Debug, Serialize, FromRow)]
pub struct WorkerListing {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub skills: String,
    pub experience_years: i64,
    pub location: String,
    pub status: String,
    pub avg_rating: f64,
    pub rating_count: i64,
}
