//! Incentive manager — validation and store delegation for incentive
//! offers.

use chrono::{DateTime, Utc};
use milperks_core::error::{MilperksError, MilperksResult};
use milperks_core::models::incentive::{Incentive, IncentiveSearchCriteria};
use milperks_core::repository::IncentiveStore;
use rust_decimal::Decimal;

/// Shared insert/update validation. At least one incentive type is
/// mandatory — an incentive with zero types is meaningless here.
fn validate(incentive: &Incentive, type_ids: &[String]) -> MilperksResult<()> {
    if incentive.business_id <= 0 {
        return Err(MilperksError::validation(
            "BusinessID is required and must be positive",
        ));
    }
    if incentive.description.trim().is_empty() {
        return Err(MilperksError::validation("Incentive description is required"));
    }
    if incentive.amount < Decimal::ZERO {
        return Err(MilperksError::validation("Incentive amount cannot be negative"));
    }
    if type_ids.is_empty() {
        return Err(MilperksError::validation(
            "At least one incentive type is required",
        ));
    }
    Ok(())
}

pub struct IncentiveManager<I: IncentiveStore> {
    store: I,
}

impl<I: IncentiveStore> IncentiveManager<I> {
    pub fn new(store: I) -> Self {
        Self { store }
    }

    /// Ordered newest-first (start date descending, id descending on
    /// ties).
    pub async fn get_incentives_by_business(
        &self,
        business_id: i32,
    ) -> MilperksResult<Vec<Incentive>> {
        self.store.get_by_business_id(business_id).await.map_err(|e| {
            MilperksError::wrap_store("Error retrieving incentives for business", e)
        })
    }

    pub async fn get_incentive_by_id(&self, incentive_id: i32) -> MilperksResult<Option<Incentive>> {
        self.store
            .get_by_id(incentive_id)
            .await
            .map_err(|e| MilperksError::wrap_store("Error retrieving incentive", e))
    }

    pub async fn search_incentives(
        &self,
        criteria: &IncentiveSearchCriteria,
    ) -> MilperksResult<Vec<Incentive>> {
        self.store
            .search(criteria)
            .await
            .map_err(|e| MilperksError::wrap_store("Error searching incentives", e))
    }

    /// Validate and insert. A start date left at the epoch default is
    /// replaced with "now".
    pub async fn add_incentive(
        &self,
        mut incentive: Incentive,
        type_ids: &[String],
    ) -> MilperksResult<i32> {
        validate(&incentive, type_ids)?;

        if incentive.start_date == DateTime::<Utc>::UNIX_EPOCH {
            incentive.start_date = Utc::now();
        }

        let id = self
            .store
            .insert(incentive, type_ids)
            .await
            .map_err(|e| MilperksError::wrap_store("Error adding incentive", e))?;
        tracing::debug!(incentive_id = id, "incentive added");
        Ok(id)
    }

    /// Validate and replace. False when the id matched nothing.
    pub async fn update_incentive(
        &self,
        incentive: &Incentive,
        type_ids: &[String],
    ) -> MilperksResult<bool> {
        validate(incentive, type_ids)?;

        let rows = self
            .store
            .update(incentive, type_ids)
            .await
            .map_err(|e| MilperksError::wrap_store("Error updating incentive", e))?;
        Ok(rows > 0)
    }
}
