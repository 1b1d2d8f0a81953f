use crate::domain::models::{
    business::{Business, BusinessListing},
    membership::{ApprovedWorkerRow, MembershipRequest, PendingRequestRow},
    rating::Rating,
    user::User,
    worker_profile::{WorkerListing, WorkerProfile},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    /// Registration for workers: user row plus default profile row in one
    /// transaction, so a crash can never leave a worker without a profile.
    async fn create_with_profile(&self, user: &User, profile: &WorkerProfile) -> Result<User, AppError>;
    async fn find_by_contact(&self, contact: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn admin_exists(&self) -> Result<bool, AppError>;
}

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn create(&self, business: &Business) -> Result<Business, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError>;
    async fn list(&self) -> Result<Vec<BusinessListing>, AppError>;
}

#[async_trait]
pub trait WorkerProfileRepository: Send + Sync {
    async fn create(&self, profile: &WorkerProfile) -> Result<WorkerProfile, AppError>;
    async fn find_by_user(&self, user_id: &str) -> Result<Option<WorkerProfile>, AppError>;
    async fn update(&self, profile: &WorkerProfile) -> Result<WorkerProfile, AppError>;
    /// Single-row status update. Returns None when no profile exists.
    async fn set_status(&self, user_id: &str, status: &str) -> Result<Option<WorkerProfile>, AppError>;
    async fn list_workers(&self, status: Option<&str>, business_id: Option<&str>) -> Result<Vec<WorkerListing>, AppError>;
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Inserts unless a row for the (business, worker) pair already exists, in
    /// which case the existing row is returned untouched. The unique pair
    /// constraint resolves races between concurrent first requests.
    async fn create_if_absent(&self, request: &MembershipRequest) -> Result<MembershipRequest, AppError>;
    async fn find_for_owner(&self, owner_id: &str, request_id: &str) -> Result<Option<MembershipRequest>, AppError>;
    /// Conditional transition out of `pending`. Returns the updated row, or
    /// None when the request is absent, not owned, or already settled.
    async fn settle(&self, owner_id: &str, request_id: &str, state: &str) -> Result<Option<MembershipRequest>, AppError>;
    async fn list_pending_for_owner(&self, owner_id: &str) -> Result<Vec<PendingRequestRow>, AppError>;
    async fn list_approved_for_owner(&self, owner_id: &str) -> Result<Vec<ApprovedWorkerRow>, AppError>;
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn create(&self, rating: &Rating) -> Result<Rating, AppError>;
}

#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
}
