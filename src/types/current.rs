use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::types::multi::MarketRecord;

// The per-world upload times come over the wire as a map of epoch
// milliseconds; chrono's serde adapters only cover plain fields, not map
// values, so the conversion is spelled out here.
fn upload_times_millis<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, i64>> = Option::deserialize(deserializer)?;
    raw.map(|times| {
        times
            .into_iter()
            .map(|(world, millis)| {
                match DateTime::from_timestamp_millis(millis) {
                    Some(time) => Ok((world, time)),
                    None => Err(de::Error::custom(format!(
                        "upload time {} for {} is out of range",
                        millis, world
                    ))),
                }
            })
            .collect()
    })
    .transpose()
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MateriaItem {
    #[serde(rename = "slotID")]
    pub slot_id: i32,
    #[serde(rename = "materiaID")]
    pub materia_id: i32,
}

/// A single active sell order. Almost every field is optional because the
/// API omits them inconsistently depending on upload source and `fields`
/// filtering.
#[derive(Clone, Debug, Deserialize)]
pub struct Listing {
    #[serde(rename = "lastReviewTime", default, with = "chrono::serde::ts_seconds_option")]
    pub last_review_time: Option<DateTime<Utc>>,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: Option<u32>,
    pub quantity: Option<u32>,
    #[serde(rename = "stainID")]
    pub stain_id: Option<u32>,
    #[serde(rename = "creatorName")]
    pub creator_name: Option<String>,
    #[serde(rename = "creatorID")]
    pub creator_id: Option<String>,
    pub hq: Option<bool>,
    #[serde(rename = "isCrafted")]
    pub is_crafted: Option<bool>,
    #[serde(rename = "listingID")]
    pub listing_id: Option<String>,
    #[serde(default)]
    pub materia: Vec<MateriaItem>,
    #[serde(rename = "onMannequin")]
    pub on_mannequin: Option<bool>,
    #[serde(rename = "retainerCity")]
    pub retainer_city: Option<i32>,
    #[serde(rename = "retainerID")]
    pub retainer_id: Option<String>,
    #[serde(rename = "retainerName")]
    pub retainer_name: Option<String>,
    #[serde(rename = "sellerID")]
    pub seller_id: Option<String>,
    pub total: Option<u64>,
    #[serde(rename = "worldName")]
    pub world_name: Option<String>,
    #[serde(rename = "worldID")]
    pub world_id: Option<u32>,
}

/// A completed sale as embedded in a current-data snapshot. The history
/// endpoint returns the stricter [`Entry`][crate::types::history::Entry]
/// shape instead.
#[derive(Clone, Debug, Deserialize)]
pub struct RecentHistoryItem {
    pub hq: Option<bool>,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: Option<u32>,
    pub quantity: Option<u32>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "onMannequin")]
    pub on_mannequin: Option<bool>,
    #[serde(rename = "buyerName")]
    pub buyer_name: Option<String>,
    pub total: Option<u64>,
    #[serde(rename = "worldName")]
    pub world_name: Option<String>,
    #[serde(rename = "worldID")]
    pub world_id: Option<u32>,
}

/// Current market snapshot for one item at one location.
///
/// The price statistics on this type are mirrored verbatim from the API,
/// not recomputed locally; only [`History`][crate::types::history::History]
/// derives its statistics from raw sale entries.
#[derive(Clone, Debug, Deserialize)]
pub struct Current {
    #[serde(rename = "itemID")]
    pub item_id: Option<u32>,
    #[serde(rename = "worldID")]
    pub world_id: Option<u32>,
    #[serde(rename = "lastUploadTime", default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_upload_time: Option<DateTime<Utc>>,
    pub listings: Option<Vec<Listing>>,
    #[serde(rename = "recentHistory")]
    pub recent_history: Option<Vec<RecentHistoryItem>>,
    #[serde(rename = "currentAveragePrice")]
    pub current_average_price: Option<f64>,
    #[serde(rename = "currentAveragePriceNQ")]
    pub current_average_price_nq: Option<f64>,
    #[serde(rename = "currentAveragePriceHQ")]
    pub current_average_price_hq: Option<f64>,
    #[serde(rename = "regularSaleVelocity")]
    pub regular_sale_velocity: Option<f64>,
    #[serde(rename = "nqSaleVelocity")]
    pub nq_sale_velocity: Option<f64>,
    #[serde(rename = "hqSaleVelocity")]
    pub hq_sale_velocity: Option<f64>,
    #[serde(rename = "averagePrice")]
    pub average_price: Option<f64>,
    #[serde(rename = "averagePriceNQ")]
    pub average_price_nq: Option<f64>,
    #[serde(rename = "averagePriceHQ")]
    pub average_price_hq: Option<f64>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<u32>,
    #[serde(rename = "minPriceNQ")]
    pub min_price_nq: Option<u32>,
    #[serde(rename = "minPriceHQ")]
    pub min_price_hq: Option<u32>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<u32>,
    #[serde(rename = "maxPriceNQ")]
    pub max_price_nq: Option<u32>,
    #[serde(rename = "maxPriceHQ")]
    pub max_price_hq: Option<u32>,
    #[serde(rename = "stackSizeHistogram")]
    pub stack_size_histogram: Option<HashMap<String, u32>>,
    #[serde(rename = "stackSizeHistogramNQ")]
    pub stack_size_histogram_nq: Option<HashMap<String, u32>>,
    #[serde(rename = "stackSizeHistogramHQ")]
    pub stack_size_histogram_hq: Option<HashMap<String, u32>>,
    #[serde(rename = "worldName")]
    pub world_name: Option<String>,
    #[serde(rename = "dcName")]
    pub dc_name: Option<String>,
    #[serde(rename = "worldUploadTimes", default, deserialize_with = "upload_times_millis")]
    pub world_upload_times: Option<HashMap<String, DateTime<Utc>>>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
}

impl MarketRecord for Current {
    fn item_id(&self) -> Option<u32> {
        self.item_id
    }
    fn world_id(&self) -> Option<u32> {
        self.world_id
    }
    fn world_name(&self) -> Option<&str> {
        self.world_name.as_deref()
    }
    fn dc_name(&self) -> Option<&str> {
        self.dc_name.as_deref()
    }
    fn region_name(&self) -> Option<&str> {
        self.region_name.as_deref()
    }
}
