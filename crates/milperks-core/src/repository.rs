//! Store trait definitions for data access abstraction.
//!
//! All store operations are async. Mutating operations report rows
//! affected (0 or 1) so callers can distinguish "nothing matched"
//! from a store failure.

use crate::error::MilperksResult;
use crate::models::business::{Business, BusinessSearchCriteria};
use crate::models::incentive::{Incentive, IncentiveSearchCriteria};
use crate::models::user::User;

pub trait BusinessStore: Send + Sync {
    /// All businesses matching every supplied criteria field.
    /// Results are unordered.
    fn search(
        &self,
        criteria: &BusinessSearchCriteria,
    ) -> impl Future<Output = MilperksResult<Vec<Business>>> + Send;

    /// `None` when no business has the id — a normal outcome.
    fn get_by_id(&self, id: i32) -> impl Future<Output = MilperksResult<Option<Business>>> + Send;

    /// Insert and return the store-assigned id. The store forces
    /// `is_active = true` and stamps `created_at`.
    fn insert(&self, business: Business) -> impl Future<Output = MilperksResult<i32>> + Send;

    /// Full replace of the mutable fields; id and creation timestamp
    /// are immutable. Returns rows affected.
    fn update(&self, business: &Business) -> impl Future<Output = MilperksResult<u64>> + Send;
}

pub trait IncentiveStore: Send + Sync {
    /// Matching incentives ordered by business name ascending, then
    /// start date descending.
    fn search(
        &self,
        criteria: &IncentiveSearchCriteria,
    ) -> impl Future<Output = MilperksResult<Vec<Incentive>>> + Send;

    /// All incentives for a business, ordered by start date
    /// descending with incentive id descending as the tie-break.
    fn get_by_business_id(
        &self,
        business_id: i32,
    ) -> impl Future<Output = MilperksResult<Vec<Incentive>>> + Send;

    fn get_by_id(&self, id: i32) -> impl Future<Output = MilperksResult<Option<Incentive>>> + Send;

    /// Insert with its associated type labels; the store joins the
    /// labels into the display string and stamps the audit fields.
    fn insert(
        &self,
        incentive: Incentive,
        type_ids: &[String],
    ) -> impl Future<Output = MilperksResult<i32>> + Send;

    /// Replace mutable fields and the type set; `created_at` is
    /// immutable, `last_updated` is bumped. Returns rows affected.
    fn update(
        &self,
        incentive: &Incentive,
        type_ids: &[String],
    ) -> impl Future<Output = MilperksResult<u64>> + Send;
}

pub trait UserStore: Send + Sync {
    /// True only when the credential digest matches AND the user is
    /// active.
    fn authenticate(
        &self,
        email: &str,
        password_hash: &str,
    ) -> impl Future<Output = MilperksResult<bool>> + Send;

    /// Hard failure (`NotFound`) when the email is unknown — contract
    /// choice, unlike the business/incentive lookups.
    fn get_by_email(&self, email: &str) -> impl Future<Output = MilperksResult<User>> + Send;

    /// Resolved access-tier labels for the email; `NotFound` when the
    /// email has no access record.
    fn get_access_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = MilperksResult<Vec<String>>> + Send;

    fn get_by_account_status(
        &self,
        account_status_id: &str,
    ) -> impl Future<Output = MilperksResult<Vec<User>>> + Send;

    /// Replace the stored hash only if `(email, old_hash)` currently
    /// authenticates. Returns rows affected.
    fn update_password_hash(
        &self,
        email: &str,
        old_hash: &str,
        new_hash: &str,
    ) -> impl Future<Output = MilperksResult<u64>> + Send;

    /// Optimistic-concurrency update: applied only if the stored
    /// record still equals `expected_current` on the tracked fields
    /// (title, first/last name, email, status, account status,
    /// membership level). An email change re-keys credential and
    /// access entries in the same logical operation. Returns rows
    /// affected; 0 means another writer got there first.
    fn update_user(
        &self,
        user: &User,
        expected_current: &User,
    ) -> impl Future<Output = MilperksResult<u64>> + Send;

    /// Insert and return the store-assigned id. Duplicate emails are
    /// rejected.
    fn insert_user(&self, user: User) -> impl Future<Output = MilperksResult<i32>> + Send;

    /// Set (not toggle) the lock flag for the account. Idempotent.
    /// Returns rows affected; 0 when the email is unknown.
    fn set_account_locked(
        &self,
        email: &str,
        locked: bool,
    ) -> impl Future<Output = MilperksResult<u64>> + Send;
}
