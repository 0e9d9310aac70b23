//! Unit tests for the github_client crate.

use super::*; // Import items from lib.rs
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate}; // For constructing mock bodies

fn label_body(name: &str, color: &str) -> serde_json::Value {
    json!({
        "id": 208045946,
        "node_id": "MDU6TGFiZWwyMDgwNDU5NDY=",
        "url": format!("https://api.github.com/repos/test-owner/test-repo/labels/{name}"),
        "name": name,
        "description": null,
        "color": color,
        "default": false
    })
}

fn create_test_client(mock_server: &MockServer) -> GitHubClient {
    let octocrab = octocrab::Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .personal_token("test-token".to_string())
        .build()
        .unwrap();
    GitHubClient::new(octocrab)
}

#[tokio::test]
async fn test_list_labels_single_page() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";

    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            label_body("bug", "d73a4a"),
            label_body("feature-request", "a2eeef"),
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_labels(owner, repo).await;

    if let Err(e) = &result {
        eprintln!("list_labels error: {e:?}");
    }
    let labels = result.expect("Expected labels");
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].name, "bug");
    assert_eq!(labels[0].color, "d73a4a");
    assert_eq!(labels[1].name, "feature-request");
    assert_eq!(labels[1].color, "a2eeef");
}

#[tokio::test]
async fn test_list_labels_follows_pagination() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";

    // The second page has no link header, which ends the listing. Mounted
    // first so its query matcher takes precedence over the first-page mock.
    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([label_body("help-wanted-now", "008672")])),
        )
        .mount(&mock_server)
        .await;

    let next_page_link = format!(
        "<{}/repos/{owner}/{repo}/labels?per_page=100&page=2>; rel=\"next\"",
        mock_server.uri()
    );
    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_page_link.as_str())
                .set_body_json(json!([
                    label_body("bug", "d73a4a"),
                    label_body("invalid-data", "e4e669"),
                ])),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_labels(owner, repo).await;

    if let Err(e) = &result {
        eprintln!("list_labels error: {e:?}");
    }
    let labels = result.expect("Expected labels");

    // API order is preserved across pages
    let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["bug", "invalid-data", "help-wanted-now"]);
}

#[tokio::test]
async fn test_list_labels_not_found() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "missing-repo";

    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/issues/labels"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_labels(owner, repo).await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_list_labels_unauthorized() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";

    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_labels(owner, repo).await;

    assert!(matches!(result, Err(Error::AuthError(_))));
}

#[tokio::test]
async fn test_list_labels_server_error_aborts_listing() {
    let mock_server = MockServer::start().await;
    let owner = "test-owner";
    let repo = "test-repo";

    // First page succeeds, the second fails. The whole listing must fail.
    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal Server Error"
        })))
        .mount(&mock_server)
        .await;

    let next_page_link = format!(
        "<{}/repos/{owner}/{repo}/labels?per_page=100&page=2>; rel=\"next\"",
        mock_server.uri()
    );
    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}/labels")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_page_link.as_str())
                .set_body_json(json!([label_body("bug", "d73a4a")])),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.list_labels(owner, repo).await;

    assert!(matches!(result, Err(Error::ApiError())));
}

#[tokio::test]
async fn test_create_token_client() {
    let result = create_token_client("test-token");

    assert!(result.is_ok());
}
