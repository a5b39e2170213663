use std::collections::HashMap;

use serde::Deserialize;

use crate::error::SchemaValidationError;

/// Identity and location accessors shared by the single-item response
/// shapes, used to synthesize a [`Multi`] wrapper around them.
pub trait MarketRecord {
    fn item_id(&self) -> Option<u32>;
    fn world_id(&self) -> Option<u32>;
    fn world_name(&self) -> Option<&str>;
    fn dc_name(&self) -> Option<&str>;
    fn region_name(&self) -> Option<&str>;
}

/// Batch response wrapper returned by the multi-item endpoints.
///
/// `item_ids` preserves chunk-submission order across a merged batch;
/// `items` holds exactly the IDs the API resolved, everything else lands in
/// `unresolved_items`. The location metadata is shared by all items since a
/// batch targets a single world/DC/region.
#[derive(Clone, Debug, Deserialize)]
pub struct Multi<T> {
    #[serde(rename = "itemIDs")]
    pub item_ids: Vec<u32>,
    pub items: HashMap<u32, T>,
    #[serde(rename = "worldID")]
    pub world_id: Option<u32>,
    #[serde(rename = "dcName")]
    pub dc_name: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    #[serde(rename = "unresolvedItems", default)]
    pub unresolved_items: Vec<u32>,
    #[serde(rename = "worldName")]
    pub world_name: Option<String>,
}

pub type MultiCurrent = Multi<super::current::Current>;
pub type MultiHistory = Multi<super::history::History>;

impl<T: MarketRecord> Multi<T> {
    /// Wrap a flat single-item response into the multi shape, carrying over
    /// the location metadata from the item itself.
    pub(crate) fn from_single(single: T) -> Result<Self, SchemaValidationError> {
        let item_id = single.item_id().ok_or_else(|| SchemaValidationError {
            path: "itemID".to_string(),
            message: "single-item response is missing its item ID".to_string(),
        })?;

        let mut items = HashMap::new();
        let world_id = single.world_id();
        let world_name = single.world_name().map(str::to_string);
        let dc_name = single.dc_name().map(str::to_string);
        let region_name = single.region_name().map(str::to_string);
        items.insert(item_id, single);

        Ok(Multi {
            item_ids: vec![item_id],
            items,
            world_id,
            dc_name,
            region_name,
            unresolved_items: Vec::new(),
            world_name,
        })
    }
}

impl<T> Multi<T> {
    /// Fold another chunk's result into this one. Item IDs and unresolved
    /// IDs concatenate in submission order; the `items` keys are disjoint
    /// across chunks, so the map union loses nothing.
    pub(crate) fn absorb(&mut self, other: Multi<T>) {
        self.item_ids.extend(other.item_ids);
        self.items.extend(other.items);
        self.unresolved_items.extend(other.unresolved_items);
    }
}
