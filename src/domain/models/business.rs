use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Business {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn new(owner_id: String, name: String, category: String, location: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id,
            name,
            category,
            location,
            created_at: Utc::now(),
        }
    }
}

/// Listing row with the owner's display name joined in.
#[derive(Debug, Serialize, FromRow)]
pub struct BusinessListing {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}
