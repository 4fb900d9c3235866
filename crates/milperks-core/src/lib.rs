//! milperks core — domain models, search semantics, and store traits
//! for the military benefits directory.
//!
//! This crate has no I/O: the filter evaluator is pure, and data
//! access is abstracted behind the [`repository`] traits so the
//! in-memory reference store and a database-backed store are
//! interchangeable.

pub mod error;
pub mod filter;
pub mod models;
pub mod repository;

pub use error::{MilperksError, MilperksResult};
