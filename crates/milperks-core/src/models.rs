//! Domain models for milperks.
//!
//! These are the core types shared across all crates.

pub mod business;
pub mod incentive;
pub mod user;
