use crate::domain::{
    models::business::{Business, BusinessListing},
    ports::BusinessRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBusinessRepo {
    pool: SqlitePool,
}

impl SqliteBusinessRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for SqliteBusinessRepo {
    async fn create(&self, business: &Business) -> Result<Business, AppError> {
        sqlx::query_as::<_, Business>(
            "INSERT INTO businesses (id, owner_id, name, category, location, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, owner_id, name, category, location, created_at",
        )
            .bind(&business.id)
            .bind(&business.owner_id)
            .bind(&business.name)
            .bind(&business.category)
            .bind(&business.location)
            .bind(business.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError> {
        sqlx::query_as::<_, Business>(
            "SELECT id, owner_id, name, category, location, created_at FROM businesses WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<BusinessListing>, AppError> {
        sqlx::query_as::<_, BusinessListing>(
            "SELECT b.id, b.name, b.category, b.location, u.name AS owner_name, b.created_at \
             FROM businesses b \
             JOIN users u ON u.id = b.owner_id \
             ORDER BY b.created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
