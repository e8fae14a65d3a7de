mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn add_content(app: &TestApp, token: &str, link: &str, title: &str, content_type: &str) {
    let response = app
        .post_authenticated("/api/v1/content", token)
        .json(&json!({
            "link": link,
            "title": title,
            "type": content_type,
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Content Added");
}

async fn list_content(app: &TestApp, token: &str) -> serde_json::Value {
    let response = app
        .get_authenticated("/api/v1/content", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_create_and_list_content() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "abcde", Some("alice")).await;
    let token = app.signin_token("a@x.com", "abcde").await;

    add_content(
        &app,
        &token,
        "https://example.com/article",
        "An article",
        "article",
    )
    .await;

    let body = list_content(&app, &token).await;
    let content = body["content"].as_array().expect("content is not an array");
    assert_eq!(content.len(), 1);

    let item = &content[0];
    assert_eq!(item["link"], "https://example.com/article");
    assert_eq!(item["title"], "An article");
    assert_eq!(item["type"], "article");
    assert_eq!(item["tags"], json!([]));
    assert_eq!(item["user"]["username"], "alice");
    assert!(item["id"].is_string());
}

#[tokio::test]
async fn test_list_returns_only_own_content() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "abcde", Some("alice")).await;
    app.signup("b@x.com", "abcde", Some("bob")).await;
    let alice = app.signin_token("a@x.com", "abcde").await;
    let bob = app.signin_token("b@x.com", "abcde").await;

    add_content(&app, &alice, "https://example.com/a", "Alice's", "link").await;
    add_content(&app, &bob, "https://example.com/b", "Bob's", "link").await;

    let body = list_content(&app, &alice).await;
    let content = body["content"].as_array().expect("content is not an array");
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["title"], "Alice's");
}

#[tokio::test]
async fn test_delete_own_content() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "abcde", Some("alice")).await;
    let token = app.signin_token("a@x.com", "abcde").await;

    add_content(&app, &token, "https://example.com", "To delete", "link").await;

    let body = list_content(&app, &token).await;
    let content_id = body["content"][0]["id"]
        .as_str()
        .expect("missing content id")
        .to_string();

    let response = app
        .delete_authenticated("/api/v1/content", &token)
        .json(&json!({ "contentId": content_id }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Deleted");

    let body = list_content(&app, &token).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_as_non_owner_is_noop() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "abcde", Some("alice")).await;
    app.signup("b@x.com", "abcde", Some("bob")).await;
    let alice = app.signin_token("a@x.com", "abcde").await;
    let bob = app.signin_token("b@x.com", "abcde").await;

    add_content(&app, &alice, "https://example.com", "Alice's", "link").await;

    let body = list_content(&app, &alice).await;
    let content_id = body["content"][0]["id"]
        .as_str()
        .expect("missing content id")
        .to_string();

    // Bob tries to delete Alice's item
    let response = app
        .delete_authenticated("/api/v1/content", &bob)
        .json(&json!({ "contentId": content_id }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    // The owner's content count is unchanged
    let body = list_content(&app, &alice).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_malformed_id_is_noop() {
    let app = TestApp::spawn().await;

    app.signup("a@x.com", "abcde", Some("alice")).await;
    let token = app.signin_token("a@x.com", "abcde").await;

    add_content(&app, &token, "https://example.com", "Kept", "link").await;

    let response = app
        .delete_authenticated("/api/v1/content", &token)
        .json(&json!({ "contentId": "not-a-valid-id" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Deleted");

    let body = list_content(&app, &token).await;
    assert_eq!(body["content"].as_array().unwrap().len(), 1);
}
