//! milperks store — in-memory reference implementations of the core
//! store traits.
//!
//! This crate is the executable specification of the search, update,
//! and account semantics: a production deployment would replace it
//! with a database-backed implementation of the same traits.

mod error;
pub mod repository;

pub use error::StoreError;
pub use repository::{MemoryBusinessStore, MemoryIncentiveStore, MemoryUserStore};
