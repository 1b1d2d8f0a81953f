use crate::domain::{models::rating::Rating, ports::RatingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRatingRepo {
    pool: PgPool,
}

impl PostgresRatingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PostgresRatingRepo {
    async fn create(&self, rating: &Rating) -> Result<Rating, AppError> {
        sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (id, worker_id, stars, comment, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING id, worker_id, stars, comment, created_at",
        )
            .bind(&rating.id)
            .bind(&rating.worker_id)
            .bind(rating.stars)
            .bind(&rating.comment)
            .bind(rating.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
