//! Incentive domain model and search criteria.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incentive {
    pub incentive_id: i32,
    /// Owning business.
    pub business_id: i32,
    // Denormalized business display fields, also used as filter
    // targets by the incentive search criteria.
    pub business_name: String,
    pub business_type_id: String,
    pub street_address: String,
    pub city: String,
    pub state_id: String,
    pub zip: String,
    /// Discount amount — a percentage when `is_percentage` is set,
    /// otherwise a dollar figure.
    pub amount: Decimal,
    pub is_percentage: bool,
    pub description: String,
    pub limitations: String,
    pub start_date: DateTime<Utc>,
    /// `None` = open-ended / ongoing.
    pub end_date: Option<DateTime<Utc>>,
    /// Comma-joined display string of the associated incentive-type
    /// labels, e.g. "Active Duty, Veteran".
    pub types_display: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Incentive {
    /// Whether `now` falls within the validity window. Both boundaries
    /// are inclusive; a missing end date never expires.
    pub fn is_currently_active(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && self.end_date.is_none_or(|end| end >= now)
    }

    /// "10.5%" for percentages (at most two decimals, trailing zeros
    /// trimmed), "$25.00" for dollar amounts.
    pub fn formatted_amount(&self) -> String {
        if self.is_percentage {
            format!("{}%", self.amount.round_dp(2).normalize())
        } else {
            format!("${:.2}", self.amount)
        }
    }

    /// "M/D/YYYY - M/D/YYYY", with "Ongoing" for an open-ended window.
    pub fn date_range_display(&self) -> String {
        let start = self.start_date.format("%-m/%-d/%Y");
        match self.end_date {
            Some(end) => format!("{} - {}", start, end.format("%-m/%-d/%Y")),
            None => format!("{} - Ongoing", start),
        }
    }
}

/// Optional per-field filters for incentive search.
///
/// Business-attribute fields are matched against the incentive's
/// denormalized business fields using the business search semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncentiveSearchCriteria {
    pub business_id: Option<i32>,
    /// Matched as a substring of `types_display` — deliberately looser
    /// than identity on a type code, preserved for compatibility.
    pub incentive_type: Option<String>,
    /// Inclusive lower bound on the amount.
    pub min_amount: Option<Decimal>,
    /// Inclusive upper bound on the amount.
    pub max_amount: Option<Decimal>,
    /// Gate on the validity window at evaluation time. When false,
    /// expired and future incentives pass.
    pub active_only: bool,
    pub business_name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_id: Option<String>,
    pub zip: Option<String>,
    pub business_type_id: Option<String>,
}

impl Default for IncentiveSearchCriteria {
    fn default() -> Self {
        Self {
            business_id: None,
            incentive_type: None,
            min_amount: None,
            max_amount: None,
            active_only: true,
            business_name: None,
            street_address: None,
            city: None,
            state_id: None,
            zip: None,
            business_type_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn incentive(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Incentive {
        Incentive {
            incentive_id: 1,
            business_id: 1,
            business_name: "Test Restaurant".into(),
            business_type_id: "Restaurant".into(),
            street_address: "123 Main St".into(),
            city: "Cedar Rapids".into(),
            state_id: "IA".into(),
            zip: "52402".into(),
            amount: dec!(10.00),
            is_percentage: true,
            description: "10% off entire meal for active duty".into(),
            limitations: "Dine-in only.".into(),
            start_date: start,
            end_date: end,
            types_display: "Active Duty, Veteran".into(),
            created_at: start,
            last_updated: start,
        }
    }

    #[test]
    fn active_within_window() {
        let now = Utc::now();
        let i = incentive(now - Duration::days(30), Some(now + Duration::days(30)));
        assert!(i.is_currently_active(now));
    }

    #[test]
    fn active_at_exact_start_boundary() {
        let now = Utc::now();
        let i = incentive(now, Some(now + Duration::days(30)));
        assert!(i.is_currently_active(now));
    }

    #[test]
    fn active_at_exact_end_boundary() {
        let now = Utc::now();
        let i = incentive(now - Duration::days(30), Some(now));
        assert!(i.is_currently_active(now));
    }

    #[test]
    fn inactive_before_start() {
        let now = Utc::now();
        let i = incentive(now + Duration::days(1), None);
        assert!(!i.is_currently_active(now));
    }

    #[test]
    fn inactive_after_end() {
        let now = Utc::now();
        let i = incentive(now - Duration::days(60), Some(now - Duration::days(1)));
        assert!(!i.is_currently_active(now));
    }

    #[test]
    fn open_ended_window_never_expires() {
        let now = Utc::now();
        let i = incentive(now - Duration::days(3650), None);
        assert!(i.is_currently_active(now));
    }

    #[test]
    fn percentage_amount_trims_trailing_zeros() {
        let now = Utc::now();
        let mut i = incentive(now, None);
        i.amount = dec!(10.00);
        assert_eq!(i.formatted_amount(), "10%");
        i.amount = dec!(12.50);
        assert_eq!(i.formatted_amount(), "12.5%");
    }

    #[test]
    fn dollar_amount_keeps_two_decimals() {
        let now = Utc::now();
        let mut i = incentive(now, None);
        i.is_percentage = false;
        i.amount = dec!(25);
        assert_eq!(i.formatted_amount(), "$25.00");
    }

    #[test]
    fn date_range_shows_ongoing_for_open_end() {
        let start = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap();
        let i = incentive(start, None);
        assert_eq!(i.date_range_display(), "3/4/2025 - Ongoing");

        let end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let i = incentive(start, Some(end));
        assert_eq!(i.date_range_display(), "3/4/2025 - 12/31/2025");
    }
}
