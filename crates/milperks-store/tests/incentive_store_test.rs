//! Integration tests for the in-memory incentive store.

use chrono::{DateTime, Duration, Utc};
use milperks_core::models::incentive::{Incentive, IncentiveSearchCriteria};
use milperks_core::repository::IncentiveStore;
use milperks_store::MemoryIncentiveStore;
use rust_decimal_macros::dec;

fn incentive(id: i32, business_id: i32, business_name: &str, start: DateTime<Utc>) -> Incentive {
    Incentive {
        incentive_id: id,
        business_id,
        business_name: business_name.into(),
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
        end_date: None,
        types_display: "Active Duty, Veteran".into(),
        created_at: start,
        last_updated: start,
    }
}

fn types(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// Business 1 has three incentives started 6 months, 3 months, and
/// 13 months ago (the 13-month one expired a year ago).
fn setup() -> MemoryIncentiveStore {
    let now = Utc::now();
    let store = MemoryIncentiveStore::new();

    let six_months = incentive(1, 1, "Test Restaurant", now - Duration::days(182));
    store.seed(six_months, &types(&["Active Duty", "Veteran"]));

    let three_months = incentive(2, 1, "Test Restaurant", now - Duration::days(91));
    store.seed(three_months, &types(&["Veteran"]));

    let mut expired = incentive(3, 1, "Test Restaurant", now - Duration::days(395));
    expired.end_date = Some(now - Duration::days(365));
    expired.amount = dec!(20.00);
    store.seed(expired, &types(&["Veteran"]));

    let mut grocery = incentive(4, 2, "Test Grocery", now - Duration::days(30));
    grocery.business_type_id = "Grocery".into();
    grocery.city = "Iowa City".into();
    grocery.zip = "52240".into();
    grocery.amount = dec!(15.00);
    grocery.types_display = "Active Duty, Veteran, Spouse".into();
    store.seed(grocery, &types(&["Active Duty", "Veteran", "Spouse"]));

    store
}

#[tokio::test]
async fn by_business_is_ordered_start_date_descending() {
    let store = setup();
    let results = store.get_by_business_id(1).await.unwrap();
    let ids: Vec<i32> = results.iter().map(|i| i.incentive_id).collect();
    // 3 months ago, 6 months ago, 13 months ago.
    assert_eq!(ids, vec![2, 1, 3]);
}

#[tokio::test]
async fn by_business_tie_breaks_on_id_descending() {
    let now = Utc::now();
    let store = MemoryIncentiveStore::new();
    let start = now - Duration::days(10);
    store.seed(incentive(1, 1, "A", start), &types(&["Veteran"]));
    store.seed(incentive(2, 1, "A", start), &types(&["Veteran"]));

    let results = store.get_by_business_id(1).await.unwrap();
    let ids: Vec<i32> = results.iter().map(|i| i.incentive_id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn search_defaults_to_currently_active() {
    let store = setup();
    let results = store
        .search(&IncentiveSearchCriteria::default())
        .await
        .unwrap();
    let ids: Vec<i32> = results.iter().map(|i| i.incentive_id).collect();
    assert!(!ids.contains(&3), "expired incentive must be gated out");
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn search_orders_by_business_name_then_start_desc() {
    let store = setup();
    let criteria = IncentiveSearchCriteria {
        active_only: false,
        ..Default::default()
    };
    let results = store.search(&criteria).await.unwrap();
    let ids: Vec<i32> = results.iter().map(|i| i.incentive_id).collect();
    // "Test Grocery" sorts before "Test Restaurant"; within the
    // restaurant, newest start date first.
    assert_eq!(ids, vec![4, 2, 1, 3]);
}

#[tokio::test]
async fn search_filters_on_amount_bounds() {
    let store = setup();
    let criteria = IncentiveSearchCriteria {
        min_amount: Some(dec!(15.00)),
        active_only: false,
        ..Default::default()
    };
    let results = store.search(&criteria).await.unwrap();
    let ids: Vec<i32> = results.iter().map(|i| i.incentive_id).collect();
    assert_eq!(ids, vec![4, 3]);
}

#[tokio::test]
async fn search_filters_on_business_attributes() {
    let store = setup();
    let criteria = IncentiveSearchCriteria {
        city: Some("iowa city".into()),
        ..Default::default()
    };
    let results = store.search(&criteria).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].business_name, "Test Grocery");
}

#[tokio::test]
async fn insert_joins_type_labels_into_display_string() {
    let store = MemoryIncentiveStore::new();
    let now = Utc::now();
    let id = store
        .insert(
            incentive(0, 1, "Test Restaurant", now),
            &types(&["Active Duty", "Veteran"]),
        )
        .await
        .unwrap();

    let stored = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.types_display, "Active Duty, Veteran");
    assert_eq!(store.types_for(id), types(&["Active Duty", "Veteran"]));
}

#[tokio::test]
async fn update_bumps_last_updated_but_not_created_at() {
    let store = setup();
    let mut i = store.get_by_id(1).await.unwrap().unwrap();
    let created_at = i.created_at;
    let previous_update = i.last_updated;
    i.description = "Updated offer".into();

    let rows = store.update(&i, &types(&["Spouse"])).await.unwrap();
    assert_eq!(rows, 1);

    let stored = store.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.description, "Updated offer");
    assert_eq!(stored.types_display, "Spouse");
    assert_eq!(stored.created_at, created_at);
    assert!(stored.last_updated > previous_update);
}

#[tokio::test]
async fn update_unknown_id_affects_zero_rows() {
    let store = setup();
    let ghost = incentive(999, 1, "Ghost", Utc::now());
    let rows = store.update(&ghost, &types(&["Veteran"])).await.unwrap();
    assert_eq!(rows, 0);
}
