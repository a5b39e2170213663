/*!
Provides `Client` struct for interacting with the Universalis market API.

# Examples

Fetching current data for a handful of items:
```rust,no_run
use universalis_market::Client;

async fn current_prices() {
    let client = Client::new();

    let result = client.items("Phoenix", &[39687, 39692, 39697], None).await.unwrap();
    for (id, current) in &result.items {
        println!("{}: {} listings", id, current.listings.as_deref().unwrap_or_default().len());
    }
}
```

Fetching sale history and the locally computed statistics:
```rust,no_run
use universalis_market::Client;

async fn sale_stats() {
    let client = Client::new();

    let history = client.item_history("Light", 5, None).await.unwrap();
    println!(
        "avg {} gil over {} units",
        history.average_price(),
        history.volume_units(),
    );
}
```
*/

mod client;
mod constants;
pub(super) mod http;
pub(super) mod utils;

pub use client::*;
