use serde::Deserialize;

/// Market tax rates per city, as percentages.
///
/// The wire names are the literal city names, spaces and apostrophes
/// included, so every field carries an explicit rename.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TaxRates {
    #[serde(rename = "Limsa Lominsa")]
    pub limsa_lominsa: u32,
    #[serde(rename = "Gridania")]
    pub gridania: u32,
    #[serde(rename = "Ul'dah")]
    pub uldah: u32,
    #[serde(rename = "Ishgard")]
    pub ishgard: u32,
    #[serde(rename = "Kugane")]
    pub kugane: u32,
    #[serde(rename = "Crystarium")]
    pub crystarium: u32,
    #[serde(rename = "Old Sharlayan")]
    pub old_sharlayan: u32,
}

/// Site-wide upload counts, most recent day first.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadHistory {
    #[serde(rename = "uploadCountByDay")]
    pub upload_count_by_day: Vec<u64>,
}

/// One world's share of total uploads.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WorldUploadCount {
    pub count: u64,
    pub proportion: f64,
}
