//! Test utilities for Ascent services.
//!
//! Provides the contract fixture loader and sample plan builders.
//! Import from tests only, never from production code.

pub mod fixture;
pub mod plan;
