pub mod repository;
pub mod template;
pub mod types;
