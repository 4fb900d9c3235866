//! milperks auth — password digests, the login state machine, and
//! account lifecycle management.

pub mod error;
pub mod password;
pub mod service;

pub use error::AuthError;
pub use password::hash_password;
pub use service::AuthService;
