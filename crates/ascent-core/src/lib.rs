//! Shared service plumbing for Ascent services: environment config, tracing,
//! health endpoints, and the common HTTP middleware layers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
