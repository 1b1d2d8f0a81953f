use crate::domain::{
    models::{user::User, worker_profile::WorkerProfile},
    ports::UserRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, role, name, contact, password_hash, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, role, name, contact, password_hash, created_at",
        )
            .bind(&user.id)
            .bind(&user.role)
            .bind(&user.name)
            .bind(&user.contact)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_with_profile(&self, user: &User, profile: &WorkerProfile) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, role, name, contact, password_hash, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, role, name, contact, password_hash, created_at",
        )
            .bind(&user.id)
            .bind(&user.role)
            .bind(&user.name)
            .bind(&user.contact)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query(
            "INSERT INTO worker_profiles (user_id, skills, experience_years, location, status, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
            .bind(&profile.user_id)
            .bind(&profile.skills)
            .bind(profile.experience_years)
            .bind(&profile.location)
            .bind(&profile.status)
            .bind(profile.created_at)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_contact(&self, contact: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, role, name, contact, password_hash, created_at FROM users WHERE contact = ?",
        )
            .bind(contact)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, role, name, contact, password_hash, created_at FROM users WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn admin_exists(&self) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'admin'")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }
}
