//! sea-orm entities for the fitness service.

pub mod onboarding_answers;
pub mod plans;
pub mod sessions;
pub mod users;
