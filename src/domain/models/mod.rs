pub mod auth;
pub mod business;
pub mod membership;
pub mod rating;
pub mod user;
pub mod worker_profile;
