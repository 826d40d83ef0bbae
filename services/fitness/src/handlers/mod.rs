pub mod health;
pub mod onboarding;
pub mod plan;
pub mod user;
