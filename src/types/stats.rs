/*!
Aggregate market statistics derived from raw sale entries.

All functions are pure over a slice of [`Entry`] and never mutate it; the
accessors on [`History`][crate::types::history::History] delegate here. Each
figure is computed over one of three partitions selected by [`Quality`]:
every sale, normal-quality sales only, or high-quality sales only.
*/

use crate::types::history::Entry;

/// Partition selector for the statistics functions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quality {
    /// Every sale regardless of quality.
    Any,
    /// Normal-quality sales only (`hq == false`).
    Normal,
    /// High-quality sales only (`hq == true`).
    High,
}

impl Quality {
    fn matches(self, entry: &Entry) -> bool {
        match self {
            Quality::Any => true,
            Quality::Normal => !entry.hq,
            Quality::High => entry.hq,
        }
    }
}

fn partition<'a>(entries: &'a [Entry], quality: Quality) -> impl Iterator<Item = &'a Entry> {
    entries.iter().filter(move |entry| quality.matches(entry))
}

/// Arithmetic mean of the per-unit price; 0.0 for an empty partition.
pub fn average_price(entries: &[Entry], quality: Quality) -> f64 {
    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for entry in partition(entries, quality) {
        sum += u64::from(entry.price_per_unit);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Median per-unit price over *all* entries (the even case averages the two
/// middle values). `None` when `entries` is empty.
pub fn median_price(entries: &[Entry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let mut prices: Vec<u32> = entries.iter().map(|entry| entry.price_per_unit).collect();
    prices.sort_unstable();

    let mid = prices.len() / 2;
    if prices.len() % 2 == 1 {
        Some(f64::from(prices[mid]))
    } else {
        Some((f64::from(prices[mid - 1]) + f64::from(prices[mid])) / 2.0)
    }
}

/// Lowest per-unit price; 0 for an empty partition.
pub fn min_price(entries: &[Entry], quality: Quality) -> u32 {
    partition(entries, quality)
        .map(|entry| entry.price_per_unit)
        .min()
        .unwrap_or(0)
}

/// Highest per-unit price; 0 for an empty partition.
pub fn max_price(entries: &[Entry], quality: Quality) -> u32 {
    partition(entries, quality)
        .map(|entry| entry.price_per_unit)
        .max()
        .unwrap_or(0)
}

/// Total units traded across the partition.
pub fn volume_units(entries: &[Entry], quality: Quality) -> u64 {
    partition(entries, quality)
        .map(|entry| u64::from(entry.quantity))
        .sum()
}

/// Total gil traded (price times quantity) across the partition.
pub fn volume_gil(entries: &[Entry], quality: Quality) -> u64 {
    partition(entries, quality)
        .map(|entry| u64::from(entry.price_per_unit) * u64::from(entry.quantity))
        .sum()
}
