//! Authentication service — login, password reset, and account
//! lifecycle orchestration.

use milperks_core::error::{MilperksError, MilperksResult};
use milperks_core::models::user::{User, UserSession};
use milperks_core::repository::UserStore;

use crate::error::AuthError;
use crate::password;

/// Authentication and account-lifecycle service.
///
/// Generic over the user store so this crate has no dependency on any
/// particular store implementation.
pub struct AuthService<U: UserStore> {
    user_store: U,
}

impl<U: UserStore> AuthService<U> {
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Check an email + password pair against the stored credential
    /// digest. The plaintext is digested before it goes anywhere.
    pub async fn authenticate(&self, email: &str, password: &str) -> MilperksResult<bool> {
        let digest = password::hash_password(Some(password))?;
        self.user_store
            .authenticate(email, &digest)
            .await
            .map_err(|e| MilperksError::wrap_store("Authentication failed", e))
    }

    /// Log a user in and build the session view.
    pub async fn login(&self, email: &str, password: &str) -> MilperksResult<UserSession> {
        // 1. Look up the user. Unknown email reports the same failure
        //    as a wrong password.
        let user = match self.user_store.get_by_email(email).await {
            Ok(u) => u,
            Err(MilperksError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(MilperksError::wrap_store("Login failed", e)),
        };

        // 2. Lock gate, strictly before any credential check: a locked
        //    account never completes authentication.
        if user.account_locked {
            tracing::warn!(email, "login rejected: account locked");
            return Err(AuthError::AccountLocked.into());
        }

        // 3. Verify the credential digest.
        if !self.authenticate(email, password).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        // 4. Resolve the access list and build the session view.
        let access = self
            .user_store
            .get_access_by_email(email)
            .await
            .map_err(|e| MilperksError::wrap_store("Login failed", e))?;

        tracing::debug!(user_id = user.user_id, "login succeeded");
        Ok(UserSession::from_user(&user, access))
    }

    /// Replace a user's password, gated on the old one.
    ///
    /// Failure is reported as a single condition without revealing
    /// which sub-check (email, old password, account state) failed.
    pub async fn reset_password(
        &self,
        email: &str,
        old_password: Option<&str>,
        new_password: Option<&str>,
    ) -> MilperksResult<()> {
        let old_digest = password::hash_password(old_password)?;
        let new_digest = password::hash_password(new_password)?;

        let rows = self
            .user_store
            .update_password_hash(email, &old_digest, &new_digest)
            .await
            .map_err(|e| MilperksError::wrap_store("Update password failed", e))?;

        if rows == 0 {
            return Err(AuthError::ResetFailed.into());
        }
        Ok(())
    }

    /// Explicit administrative lock/unlock, keyed by email. Setting a
    /// state the account is already in succeeds trivially.
    pub async fn set_account_locked(&self, email: &str, locked: bool) -> MilperksResult<()> {
        let op = if locked {
            "Failed to lock account"
        } else {
            "Failed to unlock account"
        };

        let rows = self
            .user_store
            .set_account_locked(email, locked)
            .await
            .map_err(|e| MilperksError::wrap_store(op, e))?;

        if rows == 0 {
            return Err(MilperksError::NotFound {
                entity: "user".into(),
                id: format!("email={email}"),
            });
        }

        tracing::info!(email, locked, "account lock state set");
        Ok(())
    }

    /// Register a new user; returns the store-assigned id.
    pub async fn add_user(&self, user: User) -> MilperksResult<i32> {
        self.user_store
            .insert_user(user)
            .await
            .map_err(|e| MilperksError::wrap_store("Add user failed", e))
    }

    /// Optimistic-concurrency edit: `expected_current` is the caller's
    /// snapshot of the record; the update applies only if no tracked
    /// field has drifted since that snapshot was taken.
    pub async fn edit_user(&self, user: &User, expected_current: &User) -> MilperksResult<()> {
        let rows = self
            .user_store
            .update_user(user, expected_current)
            .await
            .map_err(|e| MilperksError::wrap_store("Update failed", e))?;

        if rows == 0 {
            return Err(MilperksError::Conflict {
                message: "Update failed. Data may have been modified by another user.".into(),
            });
        }
        Ok(())
    }

    pub async fn get_user_by_email(&self, email: &str) -> MilperksResult<User> {
        self.user_store
            .get_by_email(email)
            .await
            .map_err(|e| MilperksError::wrap_store("Error retrieving user", e))
    }

    pub async fn get_access_for_user(&self, email: &str) -> MilperksResult<Vec<String>> {
        self.user_store
            .get_access_by_email(email)
            .await
            .map_err(|e| MilperksError::wrap_store("Error retrieving access", e))
    }

    pub async fn get_users_by_account_status(
        &self,
        account_status_id: &str,
    ) -> MilperksResult<Vec<User>> {
        self.user_store
            .get_by_account_status(account_status_id)
            .await
            .map_err(|e| MilperksError::wrap_store("Error retrieving users", e))
    }
}
