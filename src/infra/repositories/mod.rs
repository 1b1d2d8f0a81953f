pub mod sqlite_user_repo;
pub mod sqlite_business_repo;
pub mod sqlite_profile_repo;
pub mod sqlite_membership_repo;
pub mod sqlite_rating_repo;
pub mod sqlite_health_probe;

pub mod postgres_user_repo;
pub mod postgres_business_repo;
pub mod postgres_profile_repo;
pub mod postgres_membership_repo;
pub mod postgres_rating_repo;
pub mod postgres_health_probe;
