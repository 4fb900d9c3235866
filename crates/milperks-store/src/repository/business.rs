//! In-memory implementation of [`BusinessStore`].
//!
//! Search delegates entirely to the core filter evaluator, so this
//! store doubles as the executable specification of the business
//! search semantics.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use milperks_core::error::MilperksResult;
use milperks_core::filter;
use milperks_core::models::business::{Business, BusinessSearchCriteria};
use milperks_core::repository::BusinessStore;

use crate::error::StoreError;

pub struct MemoryBusinessStore {
    businesses: RwLock<Vec<Business>>,
    next_id: AtomicI32,
}

impl MemoryBusinessStore {
    pub fn new() -> Self {
        Self {
            businesses: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Seed a record verbatim, keeping the id allocator ahead of it.
    /// Test fixtures only.
    pub fn seed(&self, business: Business) {
        self.next_id
            .fetch_max(business.business_id + 1, Ordering::SeqCst);
        self.businesses
            .write()
            .expect("business store poisoned")
            .push(business);
    }
}

impl Default for MemoryBusinessStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessStore for MemoryBusinessStore {
    async fn search(&self, criteria: &BusinessSearchCriteria) -> MilperksResult<Vec<Business>> {
        let businesses = self
            .businesses
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(businesses
            .iter()
            .filter(|b| filter::business_matches(criteria, b))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> MilperksResult<Option<Business>> {
        let businesses = self
            .businesses
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(businesses.iter().find(|b| b.business_id == id).cloned())
    }

    async fn insert(&self, mut business: Business) -> MilperksResult<i32> {
        let mut businesses = self
            .businesses
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;

        business.business_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        business.created_at = Utc::now();
        // New businesses are always active.
        business.is_active = true;

        let id = business.business_id;
        businesses.push(business);
        Ok(id)
    }

    async fn update(&self, business: &Business) -> MilperksResult<u64> {
        let mut businesses = self
            .businesses
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;

        let Some(existing) = businesses
            .iter_mut()
            .find(|b| b.business_id == business.business_id)
        else {
            return Ok(0);
        };

        // Full replace of the mutable fields; id and created_at stay.
        existing.business_name = business.business_name.clone();
        existing.business_type_id = business.business_type_id.clone();
        existing.business_type = business.business_type.clone();
        existing.phone = business.phone.clone();
        existing.street_address = business.street_address.clone();
        existing.address2 = business.address2.clone();
        existing.city = business.city.clone();
        existing.state_id = business.state_id.clone();
        existing.state_name = business.state_name.clone();
        existing.zip = business.zip.clone();
        existing.is_active = business.is_active;

        Ok(1)
    }
}
