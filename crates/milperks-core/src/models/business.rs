//! Business domain model and search criteria.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub business_id: i32,
    pub business_name: String,
    /// Business-type code, e.g. "Restaurant".
    pub business_type_id: String,
    /// Resolved business-type display label.
    pub business_type: String,
    pub phone: String,
    pub street_address: String,
    pub address2: String,
    pub city: String,
    /// State code, e.g. "IA".
    pub state_id: String,
    /// Resolved state display label.
    pub state_name: String,
    pub zip: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Business {
    /// Single-line display address: street, unit, city, "state zip",
    /// joined with ", ". Falls back to a placeholder when no street
    /// address is on file.
    pub fn full_address(&self) -> String {
        if self.street_address.is_empty() {
            return "No address on file".to_string();
        }

        let mut parts = vec![self.street_address.clone()];
        if !self.address2.is_empty() {
            parts.push(self.address2.clone());
        }
        if !self.city.is_empty() {
            parts.push(self.city.clone());
        }
        match (self.state_id.is_empty(), self.zip.is_empty()) {
            (false, false) => parts.push(format!("{} {}", self.state_id, self.zip)),
            (false, true) => parts.push(self.state_id.clone()),
            (true, false) => parts.push(self.zip.clone()),
            (true, true) => {}
        }
        parts.join(", ")
    }
}

/// Optional per-field filters for business search.
///
/// `None` (or a blank string) means "do not constrain on this field".
/// `is_active` is always applied — there is no "show both" mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessSearchCriteria {
    pub business_name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_id: Option<String>,
    pub zip: Option<String>,
    pub business_type_id: Option<String>,
    pub is_active: bool,
}

impl Default for BusinessSearchCriteria {
    fn default() -> Self {
        Self {
            business_name: None,
            street_address: None,
            city: None,
            state_id: None,
            zip: None,
            business_type_id: None,
            is_active: true,
        }
    }
}
