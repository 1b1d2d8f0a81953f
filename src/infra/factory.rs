use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::user::{User, ROLE_ADMIN};
use crate::domain::ports::UserRepository;
use crate::domain::services::auth_service::AuthService;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_business_repo::PostgresBusinessRepo, postgres_health_probe::PostgresHealthProbe,
    postgres_membership_repo::PostgresMembershipRepo, postgres_profile_repo::PostgresProfileRepo,
    postgres_rating_repo::PostgresRatingRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_business_repo::SqliteBusinessRepo, sqlite_health_probe::SqliteHealthProbe,
    sqlite_membership_repo::SqliteMembershipRepo, sqlite_profile_repo::SqliteProfileRepo,
    sqlite_rating_repo::SqliteRatingRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let auth_service = Arc::new(AuthService::new(config));

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            business_repo: Arc::new(PostgresBusinessRepo::new(pool.clone())),
            profile_repo: Arc::new(PostgresProfileRepo::new(pool.clone())),
            membership_repo: Arc::new(PostgresMembershipRepo::new(pool.clone())),
            rating_repo: Arc::new(PostgresRatingRepo::new(pool.clone())),
            health_probe: Arc::new(PostgresHealthProbe::new(pool.clone())),
            auth_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            business_repo: Arc::new(SqliteBusinessRepo::new(pool.clone())),
            profile_repo: Arc::new(SqliteProfileRepo::new(pool.clone())),
            membership_repo: Arc::new(SqliteMembershipRepo::new(pool.clone())),
            rating_repo: Arc::new(SqliteRatingRepo::new(pool.clone())),
            health_probe: Arc::new(SqliteHealthProbe::new(pool.clone())),
            auth_service,
        }
    };

    ensure_seed_admin(&state)
        .await
        .expect("Failed to seed admin user");

    state
}

/// Idempotent bootstrap: creates the fixed admin account unless one already
/// exists. Runs on every start.
pub async fn ensure_seed_admin(state: &AppState) -> Result<(), crate::error::AppError> {
    if state.user_repo.admin_exists().await? {
        return Ok(());
    }

    let password_hash = state.auth_service.hash_password(&state.config.seed_admin_password)?;
    let admin = User::new(
        ROLE_ADMIN.to_string(),
        "Admin".to_string(),
        state.config.seed_admin_contact.clone(),
        password_hash,
    );
    state.user_repo.create(&admin).await?;

    info!("Seeded admin account: {}", admin.contact);
    Ok(())
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
