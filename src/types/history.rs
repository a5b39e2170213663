use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::multi::MarketRecord;
use crate::types::stats::{self, Quality};

/// A completed sale, the canonical input of the statistics functions in
/// [`stats`][crate::types::stats].
#[derive(Clone, Debug, Deserialize)]
pub struct Entry {
    pub hq: bool,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: u32,
    pub quantity: u32,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "onMannequin")]
    pub on_mannequin: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "worldName")]
    pub world_name: Option<String>,
    #[serde(rename = "worldID")]
    pub world_id: Option<u32>,
}

/// Sale history for one item at one location.
///
/// The sale-velocity figures and stack-size histograms come from the API
/// as-is; every price/volume statistic is derived locally from `entries`
/// through the accessors below.
#[derive(Clone, Debug, Deserialize)]
pub struct History {
    #[serde(rename = "itemID")]
    pub item_id: u32,
    #[serde(rename = "worldID")]
    pub world_id: Option<u32>,
    #[serde(rename = "lastUploadTime", with = "chrono::serde::ts_milliseconds")]
    pub last_upload_time: DateTime<Utc>,
    pub entries: Vec<Entry>,
    // Bucket size -> sale count
    #[serde(rename = "stackSizeHistogram")]
    pub stack_size_histogram: HashMap<String, u32>,
    #[serde(rename = "stackSizeHistogramNQ")]
    pub stack_size_histogram_nq: HashMap<String, u32>,
    #[serde(rename = "stackSizeHistogramHQ")]
    pub stack_size_histogram_hq: HashMap<String, u32>,
    #[serde(rename = "regularSaleVelocity")]
    pub regular_sale_velocity: f64,
    #[serde(rename = "nqSaleVelocity")]
    pub nq_sale_velocity: f64,
    #[serde(rename = "hqSaleVelocity")]
    pub hq_sale_velocity: f64,
    #[serde(rename = "worldName")]
    pub world_name: Option<String>,
    #[serde(rename = "dcName")]
    pub dc_name: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
}

impl History {
    pub fn average_price(&self) -> f64 {
        stats::average_price(&self.entries, Quality::Any)
    }

    pub fn average_price_nq(&self) -> f64 {
        stats::average_price(&self.entries, Quality::Normal)
    }

    pub fn average_price_hq(&self) -> f64 {
        stats::average_price(&self.entries, Quality::High)
    }

    /// Median over all entries; no NQ/HQ split is defined for the median.
    /// `None` when there are no entries at all.
    pub fn median_price(&self) -> Option<f64> {
        stats::median_price(&self.entries)
    }

    pub fn min_price(&self) -> u32 {
        stats::min_price(&self.entries, Quality::Any)
    }

    pub fn min_price_nq(&self) -> u32 {
        stats::min_price(&self.entries, Quality::Normal)
    }

    pub fn min_price_hq(&self) -> u32 {
        stats::min_price(&self.entries, Quality::High)
    }

    pub fn max_price(&self) -> u32 {
        stats::max_price(&self.entries, Quality::Any)
    }

    pub fn max_price_nq(&self) -> u32 {
        stats::max_price(&self.entries, Quality::Normal)
    }

    pub fn max_price_hq(&self) -> u32 {
        stats::max_price(&self.entries, Quality::High)
    }

    pub fn volume_units(&self) -> u64 {
        stats::volume_units(&self.entries, Quality::Any)
    }

    pub fn volume_units_nq(&self) -> u64 {
        stats::volume_units(&self.entries, Quality::Normal)
    }

    pub fn volume_units_hq(&self) -> u64 {
        stats::volume_units(&self.entries, Quality::High)
    }

    pub fn volume_gil(&self) -> u64 {
        stats::volume_gil(&self.entries, Quality::Any)
    }

    pub fn volume_gil_nq(&self) -> u64 {
        stats::volume_gil(&self.entries, Quality::Normal)
    }

    pub fn volume_gil_hq(&self) -> u64 {
        stats::volume_gil(&self.entries, Quality::High)
    }
}

impl MarketRecord for History {
    fn item_id(&self) -> Option<u32> {
        Some(self.item_id)
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
