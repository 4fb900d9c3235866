//! milperks directory — business and incentive managers.
//!
//! Managers validate caller input, delegate to a store, and wrap
//! store failures with stable per-operation messages so callers can
//! tell which operation failed.

pub mod business;
pub mod incentive;

pub use business::BusinessManager;
pub use incentive::IncentiveManager;
