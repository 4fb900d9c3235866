//! The filter evaluator: per-field match semantics for business and
//! incentive search, and the incentive result orderings.
//!
//! Everything here is pure — evaluation time is a parameter, never an
//! ambient clock — so a store implementation can delegate its entire
//! search semantics to this module and stay deterministic under test.

use chrono::{DateTime, Utc};

use crate::models::business::{Business, BusinessSearchCriteria};
use crate::models::incentive::{Incentive, IncentiveSearchCriteria};

/// A criteria string constrains only when present and non-blank. The
/// value itself is matched untrimmed.
fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Case-insensitive substring ("fuzzy") match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive exact match.
fn eq_ci(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Does a business satisfy every supplied criteria field?
///
/// Blank fields are skipped; `is_active` is always applied.
pub fn business_matches(criteria: &BusinessSearchCriteria, business: &Business) -> bool {
    if business.is_active != criteria.is_active {
        return false;
    }
    if let Some(name) = supplied(&criteria.business_name)
        && !contains_ci(&business.business_name, name)
    {
        return false;
    }
    if let Some(street) = supplied(&criteria.street_address)
        && !contains_ci(&business.street_address, street)
    {
        return false;
    }
    if let Some(city) = supplied(&criteria.city)
        && !contains_ci(&business.city, city)
    {
        return false;
    }
    if let Some(state) = supplied(&criteria.state_id)
        && !eq_ci(&business.state_id, state)
    {
        return false;
    }
    // Zips are numeric, so the prefix match is case-sensitive.
    if let Some(zip) = supplied(&criteria.zip)
        && !business.zip.starts_with(zip)
    {
        return false;
    }
    if let Some(type_id) = supplied(&criteria.business_type_id)
        && !eq_ci(&business.business_type_id, type_id)
    {
        return false;
    }
    true
}

/// Does an incentive satisfy every supplied criteria field at `now`?
///
/// Business-attribute fields are matched with the business semantics
/// against the incentive's denormalized business fields.
pub fn incentive_matches(
    criteria: &IncentiveSearchCriteria,
    incentive: &Incentive,
    now: DateTime<Utc>,
) -> bool {
    if let Some(business_id) = criteria.business_id
        && incentive.business_id != business_id
    {
        return false;
    }
    // Substring of the joined label list, not token identity; "Veteran"
    // also matches "Non-Veteran Supporter". Preserved legacy behavior.
    if let Some(type_label) = supplied(&criteria.incentive_type)
        && !incentive.types_display.contains(type_label)
    {
        return false;
    }
    if let Some(min) = criteria.min_amount
        && incentive.amount < min
    {
        return false;
    }
    if let Some(max) = criteria.max_amount
        && incentive.amount > max
    {
        return false;
    }
    if criteria.active_only && !incentive.is_currently_active(now) {
        return false;
    }

    if let Some(name) = supplied(&criteria.business_name)
        && !contains_ci(&incentive.business_name, name)
    {
        return false;
    }
    if let Some(street) = supplied(&criteria.street_address)
        && !contains_ci(&incentive.street_address, street)
    {
        return false;
    }
    if let Some(city) = supplied(&criteria.city)
        && !contains_ci(&incentive.city, city)
    {
        return false;
    }
    if let Some(state) = supplied(&criteria.state_id)
        && !eq_ci(&incentive.state_id, state)
    {
        return false;
    }
    if let Some(zip) = supplied(&criteria.zip)
        && !incentive.zip.starts_with(zip)
    {
        return false;
    }
    if let Some(type_id) = supplied(&criteria.business_type_id)
        && !eq_ci(&incentive.business_type_id, type_id)
    {
        return false;
    }
    true
}

/// Ordering for incentives-by-business: newest first — start date
/// descending, ties broken by incentive id descending.
pub fn order_incentives_for_business(incentives: &mut [Incentive]) {
    incentives.sort_by(|a, b| {
        b.start_date
            .cmp(&a.start_date)
            .then(b.incentive_id.cmp(&a.incentive_id))
    });
}

/// Ordering for general incentive search: business name ascending,
/// then start date descending.
pub fn order_incentive_search(incentives: &mut [Incentive]) {
    incentives.sort_by(|a, b| {
        a.business_name
            .cmp(&b.business_name)
            .then(b.start_date.cmp(&a.start_date))
    });
}
