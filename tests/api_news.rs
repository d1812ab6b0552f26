//! Integration tests for the news endpoints.

mod common;

use common::TestServer;
use serde_json::Value;

#[tokio::test]
async fn paginated_listing_is_date_descending() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let body: Value = reqwest::get(server.url("/api/news?page=1&limit=3"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(body["total"], 10);
    let articles = body["articles"].as_array().expect("articles array");
    assert_eq!(articles.len(), 3);

    // Fixture dates serialize as uniform RFC 3339 UTC strings, so
    // lexicographic order matches chronological order.
    let dates: Vec<&str> = articles
        .iter()
        .map(|a| a["publishedDate"].as_str().unwrap())
        .collect();
    assert!(dates[0] >= dates[1]);
    assert!(dates[1] >= dates[2]);
}

#[tokio::test]
async fn default_pagination_returns_everything_up_to_ten() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let body: Value = reqwest::get(server.url("/api/news"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(body["total"], 10);
    assert_eq!(body["articles"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn garbage_pagination_falls_back_to_defaults() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let response = reqwest::get(server.url("/api/news?page=abc&limit=xyz"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["total"], 10);
    assert_eq!(body["articles"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_unchanged_total() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let body: Value = reqwest::get(server.url("/api/news?page=99&limit=10"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(body["total"], 10);
    assert!(body["articles"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn total_is_invariant_across_pages() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let first: Value = reqwest::get(server.url("/api/news?page=1&limit=4"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");
    let third: Value = reqwest::get(server.url("/api/news?page=3&limit=4"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(first["total"], third["total"]);
    assert_eq!(third["articles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn single_article_by_id() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let response = reqwest::get(server.url("/api/news/1"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["success"], true);
    assert_eq!(body["article"]["id"], "1");
    assert!(body["article"]["title"].as_str().is_some());
}

#[tokio::test]
async fn unknown_article_is_404() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let response = reqwest::get(server.url("/api/news/does-not-exist"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "News article not found");
}
