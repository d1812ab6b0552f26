//! Integration tests for the research paper endpoints.

mod common;

use common::TestServer;
use serde_json::Value;

#[tokio::test]
async fn paginated_listing() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let body: Value = reqwest::get(server.url("/api/research?page=1&limit=2"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(body["total"], 3);
    let papers = body["papers"].as_array().expect("papers array");
    assert_eq!(papers.len(), 2);

    // Newest publication first: fixture paper 3 (2023-03-25) leads.
    assert_eq!(papers[0]["id"], "3");
    assert_eq!(papers[1]["id"], "2");
}

#[tokio::test]
async fn viewing_a_paper_bumps_its_view_count() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let first: Value = reqwest::get(server.url("/api/research/1"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");
    let second: Value = reqwest::get(server.url("/api/research/1"))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON body");

    assert_eq!(first["success"], true);
    let first_views = first["paper"]["views"].as_i64().unwrap();
    let second_views = second["paper"]["views"].as_i64().unwrap();
    assert_eq!(second_views, first_views + 1);
}

#[tokio::test]
async fn unknown_paper_is_404() {
    let server = TestServer::spawn().await.expect("Failed to spawn server");

    let response = reqwest::get(server.url("/api/research/does-not-exist"))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Invalid JSON body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Research paper not found");
}
