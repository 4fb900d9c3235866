//! In-memory store implementations of the core store traits.

mod business;
mod incentive;
mod user;

pub use business::MemoryBusinessStore;
pub use incentive::MemoryIncentiveStore;
pub use user::MemoryUserStore;
