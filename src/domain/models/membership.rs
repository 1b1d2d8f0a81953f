use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const STATE_PENDING: &str = "pending";
pub const STATE_APPROVED: &str = "approved";
pub const STATE_REJECTED: &str = "rejected";

/// A worker's request to join a business. At most one row per
/// (business_id, worker_id) pair, enforced by a unique constraint.
/// `pending` is the only non-terminal state; there is no revoke.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MembershipRequest {
    pub id: String,
    pub business_id: String,
    pub worker_id: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}

impl MembershipRequest {
    pub fn new(business_id: String, worker_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            business_id,
            worker_id,
            state: STATE_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Pending-request row as the owning business's owner sees it.
#[derive(Debug, Serialize, FromRow)]
pub struct PendingRequestRow {
    pub request_id: String,
    pub business_id: String,
    pub business_name: String,
    pub worker_id: String,
    pub worker_name: String,
    pub worker_contact: String,
    pub skills: String,
    pub created_at: DateTime<Utc>,
}

/// Approved (worker, business) pair for an owner's dashboard.
#[derive(Debug, Serialize, FromRow)]
pub struct ApprovedWorkerRow {
    pub worker_id: String,
    pub worker_name: String,
    pub worker_contact: String,
    pub skills: String,
    pub status: String,
    pub business_id: String,
    pub business_name: String,
}
