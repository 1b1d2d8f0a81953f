use crate::domain::{
    models::worker_profile::{WorkerListing, WorkerProfile},
    ports::WorkerProfileRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProfileRepo {
    pool: SqlitePool,
}

impl SqliteProfileRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkerProfileRepository for SqliteProfileRepo {
    async fn create(&self, profile: &WorkerProfile) -> Result<WorkerProfile, AppError> {
        sqlx::query_as::<_, WorkerProfile>(
            "INSERT INTO worker_profiles (user_id, skills, experience_years, location, status, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING user_id, skills, experience_years, location, status, created_at",
        )
            .bind(&profile.user_id)
            .bind(&profile.skills)
            .bind(profile.experience_years)
            .bind(&profile.location)
            .bind(&profile.status)
            .bind(profile.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Option<WorkerProfile>, AppError> {
        sqlx::query_as::<_, WorkerProfile>(
            "SELECT user_id, skills, experience_years, location, status, created_at FROM worker_profiles WHERE user_id = ?",
        )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, profile: &WorkerProfile) -> Result<WorkerProfile, AppError> {
        // Profile edits never touch status; it has its own endpoint.
        sqlx::query_as::<_, WorkerProfile>(
            "UPDATE worker_profiles SET skills = ?, experience_years = ?, location = ? WHERE user_id = ? RETURNING user_id, skills, experience_years, location, status, created_at",
        )
            .bind(&profile.skills)
            .bind(profile.experience_years)
            .bind(&profile.location)
            .bind(&profile.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_status(&self, user_id: &str, status: &str) -> Result<Option<WorkerProfile>, AppError> {
        sqlx::query_as::<_, WorkerProfile>(
            "UPDATE worker_profiles SET status = ? WHERE user_id = ? RETURNING user_id, skills, experience_years, location, status, created_at",
        )
            .bind(status)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_workers(&self, status: Option<&str>, business_id: Option<&str>) -> Result<Vec<WorkerListing>, AppError> {
        // Predicates are composed as fixed fragments and bound positionally in
        // the same order they appear in the SQL: business join first, then the
        // status filter.
        let mut sql = String::from(
            "SELECT u.id, u.name, u.contact, wp.skills, wp.experience_years, wp.location, wp.status, \
                    ROUND(COALESCE(AVG(r.stars), 0), 1) AS avg_rating, \
                    COUNT(r.id) AS rating_count \
             FROM users u \
             JOIN worker_profiles wp ON wp.user_id = u.id",
        );

        if business_id.is_some() {
            sql.push_str(
                " JOIN membership_requests mr ON mr.worker_id = u.id AND mr.business_id = ? AND mr.state = 'approved'",
            );
        }

        sql.push_str(" LEFT JOIN ratings r ON r.worker_id = u.id WHERE u.role = 'worker'");

        if status.is_some() {
            sql.push_str(" AND wp.status = ?");
        }

        sql.push_str(" GROUP BY u.id ORDER BY avg_rating DESC, u.created_at DESC");

        let mut query = sqlx::query_as::<_, WorkerListing>(&sql);
        if let Some(business_id) = business_id {
            query = query.bind(business_id);
        }
        if let Some(status) = status {
            query = query.bind(status);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
