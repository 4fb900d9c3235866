//! User domain model and session view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    /// Honorific, e.g. "Mr.", "Dr.".
    pub title_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub email: String,
    /// Military-affiliation category, e.g. "Veteran", "Active Duty".
    pub status_id: String,
    /// Account lifecycle category, e.g. "Active", "Suspended".
    pub account_status_id: String,
    /// Authorization tier, e.g. "Member", "Admin".
    pub mem_level_id: String,
    pub is_active: bool,
    /// A locked account never completes authentication, regardless of
    /// credential correctness.
    pub account_locked: bool,
    pub registration_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub must_update_password: bool,
}

/// The view of a user handed to the caller on successful login, with
/// the resolved access-tier labels for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: i32,
    pub title_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status_id: String,
    pub account_status_id: String,
    pub mem_level_id: String,
    pub is_active: bool,
    pub account_locked: bool,
    pub registration_date: DateTime<Utc>,
    pub must_update_password: bool,
    pub access: Vec<String>,
}

impl UserSession {
    pub fn from_user(user: &User, access: Vec<String>) -> Self {
        Self {
            user_id: user.user_id,
            title_id: user.title_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            status_id: user.status_id.clone(),
            account_status_id: user.account_status_id.clone(),
            mem_level_id: user.mem_level_id.clone(),
            is_active: user.is_active,
            account_locked: user.account_locked,
            registration_date: user.registration_date,
            must_update_password: user.must_update_password,
            access,
        }
    }
}
