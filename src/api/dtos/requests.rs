use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub role: String,
    pub name: String,
    pub contact: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub contact: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub category: Option<String>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub skills: Option<String>,
    pub experience_years: Option<i64>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct JoinRequest {
    pub business_id: String,
}

#[derive(Deserialize)]
pub struct DecisionRequest {
    pub approve: bool,
}

#[derive(Deserialize)]
pub struct RateWorkerRequest {
    pub worker_id: String,
    pub stars: i64,
    pub comment: Option<String>,
}

#[derive(Deserialize)]
pub struct WorkerListQuery {
    pub status: Option<String>,
    pub business_id: Option<String>,
}
