use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_OWNER: &str = "owner";
pub const ROLE_WORKER: &str = "worker";

/// Roles a client may self-register as. Admins exist only through the seed.
pub fn is_registrable_role(role: &str) -> bool {
    role == ROLE_OWNER || role == ROLE_WORKER
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub role: String,
    pub name: String,
    pub contact: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(role: String, name: String, contact: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            name,
            contact,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
