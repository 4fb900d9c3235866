//! Authentication error types.

use milperks_core::error::MilperksError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Deliberately covers both unknown email and wrong password, so
    /// callers cannot enumerate accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("account is locked")]
    AccountLocked,

    /// A missing password argument is a caller error, distinct from
    /// an empty one.
    #[error("password is missing")]
    PasswordMissing,

    #[error("password must not be empty")]
    PasswordEmpty,

    /// Single condition for any failed reset; does not reveal which
    /// sub-check failed.
    #[error("password reset failed")]
    ResetFailed,
}

impl From<AuthError> for MilperksError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::PasswordMissing | AuthError::PasswordEmpty => MilperksError::Validation {
                message: err.to_string(),
            },
            other => MilperksError::AuthenticationFailed {
                reason: other.to_string(),
            },
        }
    }
}
