use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rating {
    pub id: String,
    pub worker_id: String,
    pub stars: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(worker_id: String, stars: i64, comment: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            worker_id,
            stars,
            comment,
            created_at: Utc::now(),
        }
    }
}
