//! Business manager — validation and store delegation for the
//! business directory.

use milperks_core::error::{MilperksError, MilperksResult};
use milperks_core::models::business::{Business, BusinessSearchCriteria};
use milperks_core::repository::BusinessStore;

/// Required fields checked before an insert reaches the store. The
/// error names the first missing field.
fn validate_required_fields(business: &Business) -> MilperksResult<()> {
    if business.business_name.trim().is_empty() {
        return Err(MilperksError::validation("Business name is required"));
    }
    if business.business_type_id.trim().is_empty() {
        return Err(MilperksError::validation("Business type is required"));
    }
    if business.street_address.trim().is_empty() {
        return Err(MilperksError::validation("Street address is required"));
    }
    if business.city.trim().is_empty() {
        return Err(MilperksError::validation("City is required"));
    }
    if business.state_id.trim().is_empty() {
        return Err(MilperksError::validation("State is required"));
    }
    Ok(())
}

pub struct BusinessManager<B: BusinessStore> {
    store: B,
}

impl<B: BusinessStore> BusinessManager<B> {
    pub fn new(store: B) -> Self {
        Self { store }
    }

    /// `None` when no business has the id — a normal outcome, not an
    /// error.
    pub async fn get_business_by_id(&self, business_id: i32) -> MilperksResult<Option<Business>> {
        self.store
            .get_by_id(business_id)
            .await
            .map_err(|e| MilperksError::wrap_store("Error retrieving business", e))
    }

    pub async fn search_businesses(
        &self,
        criteria: &BusinessSearchCriteria,
    ) -> MilperksResult<Vec<Business>> {
        self.store
            .search(criteria)
            .await
            .map_err(|e| MilperksError::wrap_store("Error searching businesses", e))
    }

    /// Validate and insert; new businesses are always active,
    /// regardless of the caller-supplied flag.
    pub async fn add_business(&self, mut business: Business) -> MilperksResult<i32> {
        validate_required_fields(&business)?;
        business.is_active = true;

        let id = self
            .store
            .insert(business)
            .await
            .map_err(|e| MilperksError::wrap_store("Error adding business", e))?;
        tracing::debug!(business_id = id, "business added");
        Ok(id)
    }

    /// Full-record replace of the mutable fields. False when the id
    /// matched nothing.
    pub async fn update_business(&self, business: &Business) -> MilperksResult<bool> {
        let rows = self
            .store
            .update(business)
            .await
            .map_err(|e| MilperksError::wrap_store("Error updating business", e))?;
        Ok(rows > 0)
    }
}
