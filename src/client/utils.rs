use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use crate::client::constants::REQUESTS_PER_SECOND;

// One request budget for the whole process, no matter how many clients exist
static LIMITER: LazyLock<Arc<DefaultDirectRateLimiter>> =
    LazyLock::new(|| Arc::new(RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND))));

/**
INTERNAL: Build the HTTP client with default settings

# Returns
- A `reqwest::Client` with assigned default headers
*/
pub(super) fn build_http() -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(reqwest::header::USER_AGENT, "universalis-market".parse().unwrap());

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap()
}

/**
INTERNAL: Handle to the process-wide request rate limiter

Every client draws from this one limiter, so however many clients exist the
process as a whole stays inside the request-per-second quota.

# Returns
- A handle to the shared direct (un-keyed) governor rate limiter
*/
pub(super) fn shared_limiter() -> Arc<DefaultDirectRateLimiter> {
    LIMITER.clone()
}

/// Drop duplicate item IDs, keeping the first occurrence of each.
pub(super) fn dedup_ids(item_ids: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::new();
    item_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Comma-join item IDs for the endpoint path.
pub(super) fn join_ids(item_ids: &[u32]) -> String {
    item_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
