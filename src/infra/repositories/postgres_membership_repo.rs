use crate::domain::{
    models::membership::{ApprovedWorkerRow, MembershipRequest, PendingRequestRow},
    ports::MembershipRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresMembershipRepo {
    pool: PgPool,
}

impl PostgresMembershipRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepo {
    async fn create_if_absent(&self, request: &MembershipRequest) -> Result<MembershipRequest, AppError> {
        // DO NOTHING keeps an existing row (whatever its state) untouched, so
        // re-requesting never resets an already-decided request.
        let inserted = sqlx::query_as::<_, MembershipRequest>(
            "INSERT INTO membership_requests (id, business_id, worker_id, state, created_at) VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (business_id, worker_id) DO NOTHING \
             RETURNING id, business_id, worker_id, state, created_at",
        )
            .bind(&request.id)
            .bind(&request.business_id)
            .bind(&request.worker_id)
            .bind(&request.state)
            .bind(request.created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if let Some(created) = inserted {
            return Ok(created);
        }

        sqlx::query_as::<_, MembershipRequest>(
            "SELECT id, business_id, worker_id, state, created_at FROM membership_requests WHERE business_id = $1 AND worker_id = $2",
        )
            .bind(&request.business_id)
            .bind(&request.worker_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_for_owner(&self, owner_id: &str, request_id: &str) -> Result<Option<MembershipRequest>, AppError> {
        sqlx::query_as::<_, MembershipRequest>(
            "SELECT mr.id, mr.business_id, mr.worker_id, mr.state, mr.created_at \
             FROM membership_requests mr \
             JOIN businesses b ON b.id = mr.business_id \
             WHERE mr.id = $1 AND b.owner_id = $2",
        )
            .bind(request_id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn settle(&self, owner_id: &str, request_id: &str, state: &str) -> Result<Option<MembershipRequest>, AppError> {
        // The `state = 'pending'` guard makes the first decision the only
        // effective one when two race on the same row.
        sqlx::query_as::<_, MembershipRequest>(
            "UPDATE membership_requests SET state = $1 \
             WHERE id = $2 AND state = 'pending' \
               AND business_id IN (SELECT id FROM businesses WHERE owner_id = $3) \
             RETURNING id, business_id, worker_id, state, created_at",
        )
            .bind(state)
            .bind(request_id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_pending_for_owner(&self, owner_id: &str) -> Result<Vec<PendingRequestRow>, AppError> {
        sqlx::query_as::<_, PendingRequestRow>(
            "SELECT mr.id AS request_id, mr.business_id, b.name AS business_name, \
                    mr.worker_id, u.name AS worker_name, u.contact AS worker_contact, \
                    wp.skills, mr.created_at \
             FROM membership_requests mr \
             JOIN businesses b ON b.id = mr.business_id \
             JOIN users u ON u.id = mr.worker_id \
             JOIN worker_profiles wp ON wp.user_id = mr.worker_id \
             WHERE b.owner_id = $1 AND mr.state = 'pending' \
             ORDER BY mr.created_at DESC",
        )
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_approved_for_owner(&self, owner_id: &str) -> Result<Vec<ApprovedWorkerRow>, AppError> {
        sqlx::query_as::<_, ApprovedWorkerRow>(
            "SELECT mr.worker_id, u.name AS worker_name, u.contact AS worker_contact, \
                    wp.skills, wp.status, mr.business_id, b.name AS business_name \
             FROM membership_requests mr \
             JOIN businesses b ON b.id = mr.business_id \
             JOIN users u ON u.id = mr.worker_id \
             JOIN worker_profiles wp ON wp.user_id = mr.worker_id \
             WHERE b.owner_id = $1 AND mr.state = 'approved' \
             ORDER BY mr.created_at DESC",
        )
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
