use crate::domain::{models::rating::Rating, ports::RatingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRatingRepo {
    pool: SqlitePool,
}

impl SqliteRatingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for SqliteRatingRepo {
    async fn create(&self, rating: &Rating) -> Result<Rating, AppError> {
        sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (id, worker_id, stars, comment, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, worker_id, stars, comment, created_at",
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
