use std::sync::Arc;
use crate::domain::ports::{
    BusinessRepository, HealthProbe, MembershipRepository, RatingRepository,
    UserRepository, WorkerProfileRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub business_repo: Arc<dyn BusinessRepository>,
    pub profile_repo: Arc<dyn WorkerProfileRepository>,
    pub membership_repo: Arc<dyn MembershipRepository>,
    pub rating_repo: Arc<dyn RatingRepository>,
    pub health_probe: Arc<dyn HealthProbe>,
    pub auth_service: Arc<AuthService>,
}
