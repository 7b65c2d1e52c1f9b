//! Integration tests for the live Places client using mockito for HTTP mocking.

use std::sync::Arc;

use axum::response::IntoResponse;
use mockito::{Matcher, Server, ServerGuard};
use restaurant_search::cache::CacheStore;
use restaurant_search::models::SearchRequest;
use restaurant_search::places::{LiveClient, PlacesClient};
use restaurant_search::{AppError, QueryDispatcher};
use tokio::sync::RwLock;

fn client_for(server: &ServerGuard) -> LiveClient {
    LiveClient::new("test-api-key".to_string(), server.url(), 5).unwrap()
}

const SEARCH_OK: &str = r#"{
    "status": "OK",
    "results": [
        {
            "place_id": "ChIJsushi1",
            "name": "Sushi Ran",
            "formatted_address": "107 Caledonia St, Sausalito, CA",
            "rating": 4.6
        },
        {
            "place_id": "ChIJsushi2",
            "name": "Omakase",
            "formatted_address": "665 Townsend St, San Francisco, CA"
        }
    ]
}"#;

#[tokio::test]
async fn test_text_search() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "sushi in SF".into()),
            Matcher::UrlEncoded("type".into(), "restaurant".into()),
            Matcher::UrlEncoded("key".into(), "test-api-key".into()),
            Matcher::UrlEncoded("language".into(), "en".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_OK)
        .create_async()
        .await;

    let request = SearchRequest::new("sushi").with_location("SF");
    let results = client_for(&server).text_search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].place_id, "ChIJsushi1");
    assert_eq!(results[0].name, "Sushi Ran");
    assert_eq!(results[0].rating, Some(4.6));
    assert_eq!(results[1].rating, None);
}

#[tokio::test]
async fn test_text_search_zero_results() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "ZERO_RESULTS", "results": []}"#)
        .create_async()
        .await;

    let results = client_for(&server)
        .text_search(&SearchRequest::new("nothing here"))
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_text_search_quota_exceeded() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OVER_QUERY_LIMIT", "error_message": "You have exceeded your daily request quota"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .text_search(&SearchRequest::new("pizza"))
        .await
        .unwrap_err();

    match err {
        AppError::RemoteUnavailable(msg) => {
            assert!(msg.contains("OVER_QUERY_LIMIT"));
            assert!(msg.contains("quota"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_text_search_http_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server)
        .text_search(&SearchRequest::new("pizza"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
}

#[tokio::test]
async fn test_text_search_malformed_response() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OK", "results": [{"name": "no id"}]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .text_search(&SearchRequest::new("pizza"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
}

#[tokio::test]
async fn test_place_details() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/details/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("place_id".into(), "ChIJnopa".into()),
            Matcher::UrlEncoded("key".into(), "test-api-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "status": "OK",
            "result": {
                "name": "Nopa",
                "formatted_address": "560 Divisadero St, San Francisco, CA",
                "formatted_phone_number": "(415) 864-8643",
                "website": "https://nopasf.com",
                "rating": 4.5,
                "price_level": 3,
                "types": ["restaurant", "family_restaurant", "casual_restaurant"],
                "photos": [{"photo_reference": "p1"}, {"photo_reference": "p2"}],
                "opening_hours": {
                    "open_now": true,
                    "periods": [{"open": {"day": 0, "time": "0000"}}],
                    "weekday_text": ["Monday: Open 24 hours"]
                }
            }
        }"#,
        )
        .create_async()
        .await;

    let restaurant = client_for(&server).place_details("ChIJnopa").await.unwrap();

    mock.assert_async().await;
    assert_eq!(restaurant.place_id, "ChIJnopa");
    assert_eq!(restaurant.name, "Nopa");
    assert_eq!(restaurant.contact.as_deref(), Some("(415) 864-8643"));
    assert_eq!(restaurant.images.len(), 2);
    assert!(restaurant.images[0].starts_with(&server.url()));
    assert!(restaurant.amenities.good_for_children);
    assert!(restaurant.vibes.iter().any(|v| v == "Family-friendly"));
    assert!(restaurant.vibes.iter().any(|v| v == "Casual"));
    assert!(!restaurant.vibes.iter().any(|v| v == "Luxury dining"));
    assert!(restaurant.operating_hours.unwrap().open_now);
}

#[tokio::test]
async fn test_place_details_not_found() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/details/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "NOT_FOUND"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .place_details("missing")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_place_details_empty_result() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/details/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OK", "result": {}}"#)
        .create_async()
        .await;

    let err = client_for(&server).place_details("empty").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_place_details_quota_exceeded() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/details/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OVER_QUERY_LIMIT", "error_message": "You have exceeded your daily request quota"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .place_details("ChIJnopa")
        .await
        .unwrap_err();

    match err {
        AppError::RemoteUnavailable(msg) => assert!(msg.contains("OVER_QUERY_LIMIT")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_place_details_http_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/details/json")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let err = client_for(&server)
        .place_details("ChIJnopa")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
}

#[tokio::test]
async fn test_place_details_malformed_response() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/details/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OK", "result": {"name": 42}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .place_details("ChIJnopa")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
}

#[tokio::test]
async fn test_transport_error_does_not_leak_api_key() {
    // Nothing listens on port 1
    let client = LiveClient::new(
        "SECRET-KEY-123".to_string(),
        "http://127.0.0.1:1".to_string(),
        2,
    )
    .unwrap();

    let err = client
        .text_search(&SearchRequest::new("pizza"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
    assert!(!err.to_string().contains("SECRET-KEY-123"));

    let response = err.into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!body.contains("SECRET-KEY-123"), "leaked key in {}", body);
    assert!(!body.contains("key="));
}

#[tokio::test]
async fn test_dispatcher_calls_remote_once_within_ttl() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(SEARCH_OK)
        .expect(1)
        .create_async()
        .await;

    let cache = Arc::new(RwLock::new(CacheStore::new()));
    let dispatcher = QueryDispatcher::new(cache, Arc::new(client_for(&server)), 300);

    let first = dispatcher
        .search(&SearchRequest::new("sushi").with_location("SF"))
        .await
        .unwrap();
    let second = dispatcher
        .search(&SearchRequest::new("SUSHI").with_location("sf"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_dispatcher_does_not_cache_remote_failure() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let cache = Arc::new(RwLock::new(CacheStore::new()));
    let dispatcher = QueryDispatcher::new(cache.clone(), Arc::new(client_for(&server)), 300);

    for _ in 0..2 {
        let err = dispatcher
            .search(&SearchRequest::new("pizza"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RemoteUnavailable(_)));
    }

    mock.assert_async().await;
    assert!(cache.read().await.is_empty());
}
