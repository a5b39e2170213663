use chrono::DateTime;

use crate::types::history::{Entry, History};
use crate::types::stats::{self, Quality};

fn sale(price: u32, quantity: u32, hq: bool) -> Entry {
    Entry {
        hq,
        price_per_unit: price,
        quantity,
        buyer_name: "Totally Real Buyer".to_string(),
        on_mannequin: false,
        timestamp: DateTime::from_timestamp(1_693_000_000, 0).unwrap(),
        world_name: None,
        world_id: None,
    }
}

#[test]
fn mixed_quality_sales() {
    let entries = vec![sale(10, 2, false), sale(20, 1, true)];

    assert_eq!(stats::average_price(&entries, Quality::Any), 15.0);
    assert_eq!(stats::average_price(&entries, Quality::Normal), 10.0);
    assert_eq!(stats::average_price(&entries, Quality::High), 20.0);
    assert_eq!(stats::median_price(&entries), Some(15.0));
    assert_eq!(stats::min_price(&entries, Quality::Any), 10);
    assert_eq!(stats::max_price(&entries, Quality::Any), 20);
    assert_eq!(stats::volume_units(&entries, Quality::Any), 3);
    assert_eq!(stats::volume_gil(&entries, Quality::Any), 40);
}

#[test]
fn empty_partition_reports_zeroes() {
    // All sales are HQ, so the NQ partition is empty
    let entries = vec![sale(10, 2, true), sale(20, 1, true)];

    assert_eq!(stats::average_price(&entries, Quality::Normal), 0.0);
    assert_eq!(stats::min_price(&entries, Quality::Normal), 0);
    assert_eq!(stats::max_price(&entries, Quality::Normal), 0);
    assert_eq!(stats::volume_units(&entries, Quality::Normal), 0);
    assert_eq!(stats::volume_gil(&entries, Quality::Normal), 0);
}

#[test]
fn no_sales_at_all() {
    let entries: Vec<Entry> = Vec::new();

    assert_eq!(stats::average_price(&entries, Quality::Any), 0.0);
    assert_eq!(stats::min_price(&entries, Quality::Any), 0);
    assert_eq!(stats::max_price(&entries, Quality::Any), 0);
    assert_eq!(stats::volume_units(&entries, Quality::Any), 0);
    assert_eq!(stats::volume_gil(&entries, Quality::Any), 0);
    assert_eq!(stats::median_price(&entries), None);
}

#[test]
fn median_of_odd_and_even_counts() {
    let odd = vec![sale(30, 1, false), sale(10, 1, false), sale(20, 1, true)];
    assert_eq!(stats::median_price(&odd), Some(20.0));

    let even = vec![
        sale(40, 1, false),
        sale(10, 1, false),
        sale(30, 1, true),
        sale(20, 1, true),
    ];
    assert_eq!(stats::median_price(&even), Some(25.0));
}

#[test]
fn history_accessors_derive_from_entries() {
    let history = History {
        item_id: 5,
        world_id: Some(33),
        last_upload_time: DateTime::from_timestamp(1_693_000_000, 0).unwrap(),
        entries: vec![sale(10, 2, false), sale(20, 1, true)],
        stack_size_histogram: Default::default(),
        stack_size_histogram_nq: Default::default(),
        stack_size_histogram_hq: Default::default(),
        regular_sale_velocity: 0.0,
        nq_sale_velocity: 0.0,
        hq_sale_velocity: 0.0,
        world_name: Some("Phoenix".to_string()),
        dc_name: None,
        region_name: None,
    };

    assert_eq!(history.average_price(), 15.0);
    assert_eq!(history.average_price_nq(), 10.0);
    assert_eq!(history.average_price_hq(), 20.0);
    assert_eq!(history.median_price(), Some(15.0));
    assert_eq!(history.min_price(), 10);
    assert_eq!(history.min_price_nq(), 10);
    assert_eq!(history.min_price_hq(), 20);
    assert_eq!(history.max_price(), 20);
    assert_eq!(history.max_price_nq(), 10);
    assert_eq!(history.max_price_hq(), 20);
    assert_eq!(history.volume_units(), 3);
    assert_eq!(history.volume_units_nq(), 2);
    assert_eq!(history.volume_units_hq(), 1);
    assert_eq!(history.volume_gil(), 40);
    assert_eq!(history.volume_gil_nq(), 20);
    assert_eq!(history.volume_gil_hq(), 20);
}
