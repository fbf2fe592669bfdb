use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use gankio_lib::cache::ResponseCache;
use gankio_lib::{CachedClient, GankError, RecommendFeed};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Arc<CachedClient> {
    let cache = ResponseCache::new(Duration::from_secs(300));
    Arc::new(CachedClient::with_base_url(&server.uri(), cache))
}

async fn mount_history_and_day(mock_server: &MockServer) {
    // offset 10 into day_history.json resolves to 2016-09-07
    Mock::given(method("GET"))
        .and(path("/api/day/history"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("day_history.json")),
        )
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/day/2016/09/07"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("day.json")))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn recommend_flattens_five_categories_in_source_order() {
    let mock_server = MockServer::start().await;
    mount_history_and_day(&mock_server).await;

    let mut feed = RecommendFeed::new(client_for(&mock_server));
    let added = feed.fetch().await.unwrap();

    // 2 Android + 1 iOS + 1 image + 1 resource + 1 recommended; the video
    // entry in the fixture is excluded from the merge
    assert_eq!(added, 6);
    let ids: Vec<_> = feed.items().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "57d019c0421aa90e6eb16d36",
            "57ce530a421aa90e6eb16d2d",
            "57cfe229421aa90e6f4f65b6",
            "57cf9e62421aa911f4b0e4a0",
            "57cd2e5d421aa90e6eb16d27",
            "57cd2f85421aa90e6eb16d29",
        ]
    );
    assert!(feed.items().iter().all(|e| e.kind != "休息视频"));
    assert_eq!(feed.date(), NaiveDate::from_ymd_opt(2016, 9, 7));
}

#[tokio::test]
async fn recommend_contains_no_duplicates() {
    let mock_server = MockServer::start().await;
    mount_history_and_day(&mock_server).await;

    let mut feed = RecommendFeed::new(client_for(&mock_server));
    feed.fetch().await.unwrap();

    let mut ids: Vec<_> = feed.items().iter().map(|e| e.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[tokio::test]
async fn recommend_offset_out_of_range_is_an_error() {
    let mock_server = MockServer::start().await;
    mount_history_and_day(&mock_server).await;

    let mut feed = RecommendFeed::new(client_for(&mock_server)).with_offset(50);
    let err = feed.fetch().await.unwrap_err();
    assert!(matches!(
        err,
        GankError::HistoryOffsetOutOfRange { offset: 50, len: 13 }
    ));
    assert!(feed.items().is_empty());
}

#[tokio::test]
async fn recommend_refetch_hits_the_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/day/history"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("day_history.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/day/2016/09/07"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("day.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut feed = RecommendFeed::new(client_for(&mock_server));
    feed.fetch().await.unwrap();
    let first: Vec<_> = feed.items().iter().map(|e| e.id.clone()).collect();

    feed.fetch().await.unwrap();
    let second: Vec<_> = feed.items().iter().map(|e| e.id.clone()).collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn recommend_smaller_offset_resolves_newer_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/day/history"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("day_history.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/day/2016/09/23"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("day.json")))
        .mount(&mock_server)
        .await;

    let mut feed = RecommendFeed::new(client_for(&mock_server)).with_offset(0);
    feed.fetch().await.unwrap();
    assert_eq!(feed.date(), NaiveDate::from_ymd_opt(2016, 9, 23));
}
