use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::join_all;
use tokio::task::JoinHandle;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::Client;
use crate::tests::fixtures::current_json;

#[tokio::test(flavor = "multi_thread")]
async fn burst_beyond_quota_is_delayed_not_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_json(2)))
        .mount(&server)
        .await;

    let client: Arc<Client> = Client::with_base_url(server.uri()).into();

    let start = Instant::now();
    let mut join_handles: Vec<JoinHandle<()>> = Vec::new();
    for _ in 0..30 {
        let client_clone = client.clone();
        let task = tokio::spawn(async move {
            let ret = client_clone.item("Phoenix", 2, None).await;
            assert!(ret.is_ok());
        });
        join_handles.push(task);
    }

    join_all(join_handles).await;

    // 25 calls fit the one-second window; the five extra each have to wait
    // out a 40ms refill, so the burst cannot finish instantly
    assert!(
        start.elapsed() >= Duration::from_millis(150),
        "30 calls finished in {:?}, limiter did not throttle",
        start.elapsed()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn budget_is_shared_across_clients() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_json(2)))
        .mount(&server)
        .await;

    let first: Arc<Client> = Client::with_base_url(server.uri()).into();
    let second: Arc<Client> = Client::with_base_url(server.uri()).into();

    let start = Instant::now();
    let mut join_handles: Vec<JoinHandle<()>> = Vec::new();
    for client in [first, second] {
        for _ in 0..25 {
            let client_clone = client.clone();
            let task = tokio::spawn(async move {
                let ret = client_clone.item("Phoenix", 2, None).await;
                assert!(ret.is_ok());
            });
            join_handles.push(task);
        }
    }

    join_all(join_handles).await;

    // The cap is per process, not per client: 50 calls through two clients
    // still need at least 25 refills beyond the shared 25-token burst
    assert!(
        start.elapsed() >= Duration::from_millis(500),
        "50 calls via two clients finished in {:?}, budget is not shared",
        start.elapsed()
    );
}
