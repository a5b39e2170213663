use std::collections::HashMap;
use std::sync::Arc;

use governor::DefaultDirectRateLimiter;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::constants::{BASE_URL, MAX_IDS_PER_REQUEST};
use crate::client::utils::{build_http, dedup_ids, join_ids, shared_limiter};
use crate::error::ApiError;
use crate::types::current::Current;
use crate::types::extra::{TaxRates, UploadHistory, WorldUploadCount};
use crate::types::history::History;
use crate::types::multi::{MarketRecord, Multi, MultiCurrent, MultiHistory};
use crate::types::request::{CurrentOptions, HistoryOptions, WorldDcRegion};

pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) limiter: Arc<DefaultDirectRateLimiter>,
    pub(crate) base_url: String,
}

#[derive(Serialize)]
struct NoQuery;

#[derive(Serialize)]
struct TaxRatesQuery {
    world: String,
}

impl Client {
    /**
    Constructs a new client against the public Universalis endpoint

    # Returns
    A client? duh?
    */
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /**
    Constructs a client against a custom base URL, e.g. a mock server

    # Arguments
    - `base_url`: Scheme and host to prepend to every endpoint path, without a trailing slash

    # Returns
    A client pointed at `base_url`
    */
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Client {
            http: build_http(),
            // Every client shares the one process-wide request budget
            limiter: shared_limiter(),
            base_url: base_url.into(),
        }
    }

    /**
    Fetch the current market snapshot for a single item

    # Arguments
    - `world_dc_region`: The world, data center or region to retrieve data for,
      by ID or by name
    - `item_id`: The item ID of the item to retrieve data for
    - `options`: Optional query parameters, see [`CurrentOptions`]

    # Returns
    A [`Current`] snapshot with listings and recent sales
    */
    pub async fn item(
        &self,
        world_dc_region: impl Into<WorldDcRegion>,
        item_id: u32,
        options: Option<CurrentOptions>,
    ) -> Result<Current, ApiError> {
        let path = format!("/api/{}/{}", world_dc_region.into(), item_id);
        self.get(&path, options.as_ref()).await
    }

    /**
    Fetch the sale history for a single item

    # Arguments
    - `world_dc_region`: The world, data center or region to retrieve data for,
      by ID or by name. Regions should be specified as Japan, Europe,
      North-America, Oceania, China, or 中国
    - `item_id`: The item ID of the item to retrieve data for
    - `options`: Optional query parameters, see [`HistoryOptions`]

    # Returns
    A [`History`] whose price and volume statistics are computed locally
    from its entries
    */
    pub async fn item_history(
        &self,
        world_dc_region: impl Into<WorldDcRegion>,
        item_id: u32,
        options: Option<HistoryOptions>,
    ) -> Result<History, ApiError> {
        let path = format!("/api/v2/history/{}/{}", world_dc_region.into(), item_id);
        self.get(&path, options.as_ref()).await
    }

    /**
    Fetch current market snapshots for any number of items

    Duplicated IDs are collapsed before anything goes over the wire. Requests
    above the API's 100-ID ceiling are split into chunks and the partial
    responses merged back into one [`MultiCurrent`]; a request that ends up
    with a single ID gets the API's flat single-item response wrapped into
    the same multi shape. A transport or validation failure on any chunk
    fails the whole call, nothing partial is returned.

    # Arguments
    - `world_dc_region`: The world, data center or region to retrieve data for
    - `item_ids`: The item IDs to retrieve data for
    - `options`: Optional query parameters, see [`CurrentOptions`]

    # Returns
    One [`MultiCurrent`] covering every requested item
    */
    pub async fn items(
        &self,
        world_dc_region: impl Into<WorldDcRegion>,
        item_ids: &[u32],
        options: Option<CurrentOptions>,
    ) -> Result<MultiCurrent, ApiError> {
        self.fetch_batch("/api/v2", &world_dc_region.into(), item_ids, options.as_ref())
            .await
    }

    /**
    Fetch sale histories for any number of items

    Batching behaves exactly as in [`Client::items`]: dedup, chunks of at
    most 100, merged result, all-or-nothing on failure.

    # Arguments
    - `world_dc_region`: The world, data center or region to retrieve data for
    - `item_ids`: The item IDs to retrieve data for
    - `options`: Optional query parameters, see [`HistoryOptions`]

    # Returns
    One [`MultiHistory`] covering every requested item
    */
    pub async fn items_history(
        &self,
        world_dc_region: impl Into<WorldDcRegion>,
        item_ids: &[u32],
        options: Option<HistoryOptions>,
    ) -> Result<MultiHistory, ApiError> {
        self.fetch_batch(
            "/api/v2/history",
            &world_dc_region.into(),
            item_ids,
            options.as_ref(),
        )
        .await
    }

    /**
    Fetch the current market tax rates for a world

    # Arguments
    - `world`: The world to retrieve rates for, by ID or by name

    # Returns
    Per-city [`TaxRates`], as percentages
    */
    pub async fn tax_rates(&self, world: impl Into<WorldDcRegion>) -> Result<TaxRates, ApiError> {
        let query = TaxRatesQuery {
            world: world.into().to_string(),
        };
        self.get("/api/v2/tax-rates", Some(&query)).await
    }

    /**
    Fetch the site-wide upload counts per day

    # Returns
    An [`UploadHistory`], most recent day first
    */
    pub async fn upload_history(&self) -> Result<UploadHistory, ApiError> {
        self.get("/api/v2/extra/stats/upload-history", None::<&NoQuery>)
            .await
    }

    /**
    Fetch the upload count and share per world

    # Returns
    A map from world name to its [`WorldUploadCount`]
    */
    pub async fn world_upload_counts(&self) -> Result<HashMap<String, WorldUploadCount>, ApiError> {
        self.get("/api/v2/extra/stats/world-upload-counts", None::<&NoQuery>)
            .await
    }

    /// One-or-many orchestration behind [`Client::items`] and
    /// [`Client::items_history`]. Chunks are fetched in submission order and
    /// folded into the first chunk's result; the merge is a concatenation of
    /// `item_ids`/`unresolved_items` plus a disjoint-key map union, and the
    /// shared location metadata is whatever the first chunk reported.
    ///
    /// An empty `item_ids` slice is passed through as a single call to the
    /// multi endpoint; what the API does with it is its own business.
    async fn fetch_batch<T>(
        &self,
        prefix: &str,
        world_dc_region: &WorldDcRegion,
        item_ids: &[u32],
        query: Option<&impl Serialize>,
    ) -> Result<Multi<T>, ApiError>
    where
        T: MarketRecord + DeserializeOwned,
    {
        let item_ids = dedup_ids(item_ids);

        if item_ids.len() <= MAX_IDS_PER_REQUEST {
            return self.fetch_chunk(prefix, world_dc_region, &item_ids, query).await;
        }

        // The guard above makes the split infallible
        let (first, rest) = item_ids.split_at(MAX_IDS_PER_REQUEST);
        let mut merged = self.fetch_chunk(prefix, world_dc_region, first, query).await?;
        for chunk in rest.chunks(MAX_IDS_PER_REQUEST) {
            let part = self.fetch_chunk(prefix, world_dc_region, chunk, query).await?;
            merged.absorb(part);
        }

        Ok(merged)
    }

    /// Issue one transport call for at most 100 deduplicated IDs. The API
    /// answers a single-ID request with the flat single-item shape, so that
    /// case parses the flat object and wraps it into a fake multi.
    async fn fetch_chunk<T>(
        &self,
        prefix: &str,
        world_dc_region: &WorldDcRegion,
        item_ids: &[u32],
        query: Option<&impl Serialize>,
    ) -> Result<Multi<T>, ApiError>
    where
        T: MarketRecord + DeserializeOwned,
    {
        let path = format!("{}/{}/{}", prefix, world_dc_region, join_ids(item_ids));

        if item_ids.len() == 1 {
            let single: T = self.get(&path, query).await?;
            log::debug!("synthesizing a fake multi response for item ID {}", item_ids[0]);
            Ok(Multi::from_single(single)?)
        } else {
            self.get(&path, query).await
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
