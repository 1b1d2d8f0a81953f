pub mod auth;
pub mod business;
pub mod health;
pub mod membership;
pub mod rating;
pub mod worker;
