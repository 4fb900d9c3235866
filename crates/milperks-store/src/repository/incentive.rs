//! In-memory implementation of [`IncentiveStore`].

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use milperks_core::error::MilperksResult;
use milperks_core::filter;
use milperks_core::models::incentive::{Incentive, IncentiveSearchCriteria};
use milperks_core::repository::IncentiveStore;

use crate::error::StoreError;

struct Inner {
    incentives: Vec<Incentive>,
    /// Type labels per incentive id; `types_display` is the joined
    /// rendering of this set.
    types: HashMap<i32, Vec<String>>,
}

pub struct MemoryIncentiveStore {
    inner: RwLock<Inner>,
    next_id: AtomicI32,
}

impl MemoryIncentiveStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                incentives: Vec::new(),
                types: HashMap::new(),
            }),
            next_id: AtomicI32::new(1),
        }
    }

    /// Seed a record verbatim, keeping the id allocator ahead of it.
    /// Test fixtures only.
    pub fn seed(&self, incentive: Incentive, type_ids: &[String]) {
        self.next_id
            .fetch_max(incentive.incentive_id + 1, Ordering::SeqCst);
        let mut inner = self.inner.write().expect("incentive store poisoned");
        inner.types.insert(incentive.incentive_id, type_ids.to_vec());
        inner.incentives.push(incentive);
    }

    /// The type labels recorded for an incentive (empty when unknown).
    pub fn types_for(&self, incentive_id: i32) -> Vec<String> {
        self.inner
            .read()
            .expect("incentive store poisoned")
            .types
            .get(&incentive_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MemoryIncentiveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IncentiveStore for MemoryIncentiveStore {
    async fn search(&self, criteria: &IncentiveSearchCriteria) -> MilperksResult<Vec<Incentive>> {
        let now = Utc::now();
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        let mut results: Vec<Incentive> = inner
            .incentives
            .iter()
            .filter(|i| filter::incentive_matches(criteria, i, now))
            .cloned()
            .collect();
        filter::order_incentive_search(&mut results);
        Ok(results)
    }

    async fn get_by_business_id(&self, business_id: i32) -> MilperksResult<Vec<Incentive>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        let mut results: Vec<Incentive> = inner
            .incentives
            .iter()
            .filter(|i| i.business_id == business_id)
            .cloned()
            .collect();
        filter::order_incentives_for_business(&mut results);
        Ok(results)
    }

    async fn get_by_id(&self, id: i32) -> MilperksResult<Option<Incentive>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        Ok(inner.incentives.iter().find(|i| i.incentive_id == id).cloned())
    }

    async fn insert(&self, mut incentive: Incentive, type_ids: &[String]) -> MilperksResult<i32> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;

        let now = Utc::now();
        incentive.incentive_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        incentive.created_at = now;
        incentive.last_updated = now;
        incentive.types_display = type_ids.join(", ");

        let id = incentive.incentive_id;
        inner.types.insert(id, type_ids.to_vec());
        inner.incentives.push(incentive);
        Ok(id)
    }

    async fn update(&self, incentive: &Incentive, type_ids: &[String]) -> MilperksResult<u64> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        let inner = &mut *guard;

        let Some(existing) = inner
            .incentives
            .iter_mut()
            .find(|i| i.incentive_id == incentive.incentive_id)
        else {
            return Ok(0);
        };

        existing.business_id = incentive.business_id;
        existing.business_name = incentive.business_name.clone();
        existing.business_type_id = incentive.business_type_id.clone();
        existing.street_address = incentive.street_address.clone();
        existing.city = incentive.city.clone();
        existing.state_id = incentive.state_id.clone();
        existing.zip = incentive.zip.clone();
        existing.amount = incentive.amount;
        existing.is_percentage = incentive.is_percentage;
        existing.description = incentive.description.clone();
        existing.start_date = incentive.start_date;
        existing.end_date = incentive.end_date;
        existing.limitations = incentive.limitations.clone();
        existing.types_display = type_ids.join(", ");
        // created_at is immutable; only the update stamp moves.
        existing.last_updated = Utc::now();

        inner.types.insert(incentive.incentive_id, type_ids.to_vec());
        Ok(1)
    }
}
