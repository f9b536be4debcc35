#![cfg(feature = "reqwest-client")]

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use backend_kraken::{Config, Error, KrakenClient, ReqwestClient};
use kraken_native::{StubResponse, StubServer};
use serde_json::json;

const USER_AGENT: &str = "kraken-native-tests/0.1";

fn client_for(server: &StubServer) -> KrakenClient<ReqwestClient> {
    let config = Config::new(server.api_root(), USER_AGENT).with_timeout(Duration::from_secs(10));
    KrakenClient::new(Arc::new(config), ReqwestClient::new().unwrap())
}

fn fixture() -> serde_json::Value {
    json!({
        "_total": 2,
        "channels": [
            { "status": "first", "name": "one", "viewers": 3, "preview": { "small": "a.jpg" } },
            { "status": "second", "name": "two", "logo": "b.png" }
        ]
    })
}

#[test]
fn test_query_streams_over_reqwest() {
    let server = StubServer::start(StubResponse::json(&fixture())).unwrap();
    let client = client_for(&server);

    let streams = client.query_streams("rust").unwrap();

    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0].channel_name, "one");
    assert_eq!(streams[0].viewer_count, "3");
    assert_eq!(streams[0].thumbnail_url, "a.jpg");
    assert_eq!(streams[1].logo_url, "b.png");

    let requests = server.requests();
    assert_eq!(requests[0].target, "/kraken/search/streams?limit=10&q=rust");
    assert_eq!(requests[0].header("User-Agent"), Some(USER_AGENT));
}

#[test]
fn test_http_500_is_remote_error_over_reqwest() {
    let server = StubServer::start(StubResponse::with_status(500, "down")).unwrap();
    let client = client_for(&server);

    let err = client.query_streams("rust").unwrap_err();

    assert!(matches!(
        err,
        Error::Remote { status: Some(500), ref message } if message == "down"
    ));
}

#[test]
fn test_cancel_mid_request_over_reqwest() {
    let response = StubResponse::json(&fixture()).trickled(16, Duration::from_millis(100));
    let server = StubServer::start(response).unwrap();
    let client = client_for(&server);

    let flag = client.cancellation_flag();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        flag.cancel();
    });

    let started = Instant::now();
    let result = client.query_streams("rust");
    canceller.join().unwrap();

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(3));
}
