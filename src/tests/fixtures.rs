//! JSON bodies shaped like the Universalis responses, for the mocked
//! transport tests.

use serde_json::{Value, json};

pub(crate) fn current_json(item_id: u32) -> Value {
    json!({
        "itemID": item_id,
        "worldID": 33,
        "lastUploadTime": 1_693_000_000_000u64,
        "listings": [{
            "lastReviewTime": 1_693_000_000,
            "pricePerUnit": 100,
            "quantity": 1,
            "hq": false,
            "retainerName": "Moneybags",
            "total": 100
        }],
        "recentHistory": [{
            "hq": false,
            "pricePerUnit": 95,
            "quantity": 2,
            "timestamp": 1_692_999_000,
            "buyerName": "Totally Real Buyer"
        }],
        "worldUploadTimes": {"Phoenix": 1_693_000_000_000u64},
        "worldName": "Phoenix"
    })
}

pub(crate) fn history_json(item_id: u32) -> Value {
    json!({
        "itemID": item_id,
        "worldID": 33,
        "lastUploadTime": 1_693_000_000_000u64,
        "entries": [{
            "hq": false,
            "pricePerUnit": 100,
            "quantity": 2,
            "buyerName": "Totally Real Buyer",
            "onMannequin": false,
            "timestamp": 1_693_000_000
        }],
        "stackSizeHistogram": {"1": 1},
        "stackSizeHistogramNQ": {"1": 1},
        "stackSizeHistogramHQ": {},
        "regularSaleVelocity": 0.5,
        "nqSaleVelocity": 0.5,
        "hqSaleVelocity": 0.0,
        "worldName": "Phoenix"
    })
}

fn multi_json(
    item_ids: &[u32],
    unresolved: &[u32],
    body: impl Fn(u32) -> Value,
) -> Value {
    let items: serde_json::Map<String, Value> = item_ids
        .iter()
        .copied()
        .filter(|id| !unresolved.contains(id))
        .map(|id| (id.to_string(), body(id)))
        .collect();

    json!({
        "itemIDs": item_ids,
        "items": items,
        "worldID": 33,
        "worldName": "Phoenix",
        "unresolvedItems": unresolved
    })
}

pub(crate) fn multi_current_json(item_ids: &[u32], unresolved: &[u32]) -> Value {
    multi_json(item_ids, unresolved, current_json)
}

pub(crate) fn multi_history_json(item_ids: &[u32], unresolved: &[u32]) -> Value {
    multi_json(item_ids, unresolved, history_json)
}

/// Comma-joined ID path segment, matching what the client sends.
pub(crate) fn ids_segment(item_ids: &[u32]) -> String {
    item_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
