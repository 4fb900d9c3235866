//! In-memory implementation of [`UserStore`].
//!
//! Canonical owner of user records, credential digests (keyed by
//! email), and resolved access lists. The optimistic-concurrency
//! update and the email-change cascade both happen under a single
//! write lock, so the compare-and-apply is atomic from the caller's
//! point of view.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use milperks_core::error::MilperksResult;
use milperks_core::models::user::User;
use milperks_core::repository::UserStore;

use crate::error::StoreError;

struct Inner {
    users: Vec<User>,
    /// email -> password digest
    credentials: HashMap<String, String>,
    /// email -> access-tier labels
    access: HashMap<String, Vec<String>>,
}

impl Inner {
    fn authenticate(&self, email: &str, password_hash: &str) -> bool {
        if self.credentials.get(email).map(String::as_str) != Some(password_hash) {
            return false;
        }
        // A credential match for an inactive user does not authenticate.
        self.users
            .iter()
            .any(|u| u.email == email && u.is_active)
    }
}

pub struct MemoryUserStore {
    inner: RwLock<Inner>,
    next_id: AtomicI32,
    /// Digest seeded as the credential for newly inserted users.
    default_password_hash: String,
}

impl MemoryUserStore {
    pub fn new(default_password_hash: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                credentials: HashMap::new(),
                access: HashMap::new(),
            }),
            next_id: AtomicI32::new(1),
            default_password_hash: default_password_hash.into(),
        }
    }

    /// Seed a user record verbatim, keeping the id allocator ahead of
    /// it. Test fixtures only.
    pub fn seed_user(&self, user: User) {
        self.next_id.fetch_max(user.user_id + 1, Ordering::SeqCst);
        self.inner
            .write()
            .expect("user store poisoned")
            .users
            .push(user);
    }

    /// Seed a credential digest for an email. Test fixtures only.
    pub fn seed_credential(&self, email: impl Into<String>, password_hash: impl Into<String>) {
        self.inner
            .write()
            .expect("user store poisoned")
            .credentials
            .insert(email.into(), password_hash.into());
    }

    /// Seed the access list for an email. Test fixtures only.
    pub fn seed_access(&self, email: impl Into<String>, access: Vec<String>) {
        self.inner
            .write()
            .expect("user store poisoned")
            .access
            .insert(email.into(), access);
    }
}

/// The field set compared by the optimistic-concurrency update.
fn tracked_fields_match(stored: &User, expected: &User) -> bool {
    stored.title_id == expected.title_id
        && stored.first_name == expected.first_name
        && stored.last_name == expected.last_name
        && stored.email == expected.email
        && stored.status_id == expected.status_id
        && stored.account_status_id == expected.account_status_id
        && stored.mem_level_id == expected.mem_level_id
}

impl UserStore for MemoryUserStore {
    async fn authenticate(&self, email: &str, password_hash: &str) -> MilperksResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(inner.authenticate(email, password_hash))
    }

    async fn get_by_email(&self, email: &str) -> MilperksResult<User> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        inner
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: "user".into(),
                    id: format!("email={email}"),
                }
                .into()
            })
    }

    async fn get_access_by_email(&self, email: &str) -> MilperksResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        inner.access.get(email).cloned().ok_or_else(|| {
            StoreError::NotFound {
                entity: "access".into(),
                id: format!("email={email}"),
            }
            .into()
        })
    }

    async fn get_by_account_status(&self, account_status_id: &str) -> MilperksResult<Vec<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(inner
            .users
            .iter()
            .filter(|u| u.account_status_id == account_status_id)
            .cloned()
            .collect())
    }

    async fn update_password_hash(
        &self,
        email: &str,
        old_hash: &str,
        new_hash: &str,
    ) -> MilperksResult<u64> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        if !inner.authenticate(email, old_hash) {
            return Ok(0);
        }
        inner.credentials.insert(email.into(), new_hash.into());
        Ok(1)
    }

    async fn update_user(&self, user: &User, expected_current: &User) -> MilperksResult<u64> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        let inner = &mut *guard;

        let Some(existing) = inner.users.iter_mut().find(|u| {
            u.user_id == user.user_id && tracked_fields_match(u, expected_current)
        }) else {
            // Another writer modified a tracked field first.
            return Ok(0);
        };

        let old_email = existing.email.clone();
        existing.title_id = user.title_id.clone();
        existing.first_name = user.first_name.clone();
        existing.last_name = user.last_name.clone();
        existing.email = user.email.clone();
        existing.status_id = user.status_id.clone();
        existing.account_status_id = user.account_status_id.clone();
        existing.mem_level_id = user.mem_level_id.clone();
        existing.last_updated = Utc::now();

        // Re-key credential and access entries when the email changed.
        if old_email != user.email {
            if let Some(hash) = inner.credentials.remove(&old_email) {
                inner.credentials.insert(user.email.clone(), hash);
            }
            if let Some(access) = inner.access.remove(&old_email) {
                inner.access.insert(user.email.clone(), access);
            }
        }

        Ok(1)
    }

    async fn insert_user(&self, user: User) -> MilperksResult<i32> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;

        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::AlreadyExists {
                entity: format!("user with email {}", user.email),
            }
            .into());
        }

        let now = Utc::now();
        let new_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let email = user.email.clone();
        let mem_level = user.mem_level_id.clone();

        inner.users.push(User {
            user_id: new_id,
            is_active: true,
            account_locked: false,
            registration_date: now,
            last_updated: now,
            ..user
        });

        // New accounts start with the configured default credential and
        // an access list derived from their membership level.
        inner
            .credentials
            .insert(email.clone(), self.default_password_hash.clone());
        inner.access.insert(email, vec![mem_level]);

        Ok(new_id)
    }

    async fn set_account_locked(&self, email: &str, locked: bool) -> MilperksResult<u64> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;

        let Some(user) = inner
            .users
            .iter_mut()
            .find(|u| u.email.eq_ignore_ascii_case(email))
        else {
            return Ok(0);
        };

        // Set, not toggle: re-locking a locked account is a no-op.
        user.account_locked = locked;
        user.last_updated = Utc::now();
        Ok(1)
    }
}
