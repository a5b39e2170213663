use std::fmt;

use serde::{Serialize, Serializer};

/// Location selector: a world, data center or region, by numeric ID or by
/// name. Regions are Japan, Europe, North-America, Oceania, China or 中国.
/// Forwarded verbatim into the endpoint path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WorldDcRegion {
    Id(u32),
    Name(String),
}

impl fmt::Display for WorldDcRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldDcRegion::Id(id) => write!(f, "{}", id),
            WorldDcRegion::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u32> for WorldDcRegion {
    fn from(id: u32) -> Self {
        WorldDcRegion::Id(id)
    }
}

impl From<&str> for WorldDcRegion {
    fn from(name: &str) -> Self {
        WorldDcRegion::Name(name.to_string())
    }
}

impl From<String> for WorldDcRegion {
    fn from(name: String) -> Self {
        WorldDcRegion::Name(name)
    }
}

// Sequence-valued query parameters go over the wire comma-joined
fn comma_separated<S: Serializer>(
    fields: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match fields {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}

/// Query options for the current-data endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CurrentOptions {
    /// Number of listings to return per item, all by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listings: Option<u32>,
    /// Number of recent-history entries to return per item, 5 by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<u32>,
    /// Strip Gil sales tax from listing prices
    #[serde(rename = "noGst", skip_serializing_if = "Option::is_none")]
    pub no_gst: Option<bool>,
    /// Filter listings by quality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hq: Option<bool>,
    /// Window before now to calculate stats over, in milliseconds (default 7 days)
    #[serde(rename = "statsWithin", skip_serializing_if = "Option::is_none")]
    pub stats_within: Option<u64>,
    /// Window before now to take entries within, in seconds
    #[serde(rename = "entriesWithin", skip_serializing_if = "Option::is_none")]
    pub entries_within: Option<u64>,
    /// Restrict the response to these fields
    #[serde(serialize_with = "comma_separated", skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Query options for the history endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct HistoryOptions {
    /// Number of entries to return per item, 1800 by default, 999999 at most
    #[serde(rename = "entriesToReturn", skip_serializing_if = "Option::is_none")]
    pub entries_to_return: Option<u32>,
    /// Window before now to calculate stats over, in milliseconds (default 7 days)
    #[serde(rename = "statsWithin", skip_serializing_if = "Option::is_none")]
    pub stats_within: Option<u64>,
    /// Window before now to take entries within, in seconds
    #[serde(rename = "entriesWithin", skip_serializing_if = "Option::is_none")]
    pub entries_within: Option<u64>,
}
