use anyhow::Result;
use cubox_share::application::MemoGateway;
use cubox_share::domain::{SaveMemoOutcome, SaveMemoRequest};
use cubox_share::infrastructure::CuboxClient;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The blocking client owns its own runtime, so it must run off the test runtime
async fn save(
    base_url: String,
    api_key: &str,
    request: SaveMemoRequest,
) -> Result<SaveMemoOutcome> {
    let api_key = api_key.to_string();
    tokio::task::spawn_blocking(move || {
        let client = CuboxClient::with_base_url(base_url)?;
        Ok::<_, anyhow::Error>(client.save_memo(&api_key, &request))
    })
    .await?
}

async fn respond_with(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/c/api/save/key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn given_memo_when_saving_then_posts_json_to_key_path() -> Result<()> {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/c/api/save/key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "type": "memo",
            "content": "body",
            "title": "Title",
            "description": "body",
            "tags": ["a", "b"],
            "folder": "Inbox",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;
    let request = SaveMemoRequest::memo("Title", "body")
        .with_tags(Some(vec!["a".to_string(), "b".to_string()]))
        .with_folder(Some("Inbox".to_string()));

    // Act
    let outcome = save(server.uri(), "key", request).await?;

    // Assert
    assert_eq!(outcome, SaveMemoOutcome::succeeded());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_unset_tags_and_folder_when_saving_then_body_has_no_such_keys() -> Result<()> {
    // Arrange
    let server = respond_with(json!({"code": 200})).await;

    // Act
    save(server.uri(), "key", SaveMemoRequest::memo("T", "c")).await?;

    // Assert
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body)?;
    let object = body.as_object().expect("JSON object");
    assert!(!object.contains_key("tags"));
    assert!(!object.contains_key("folder"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_rejection_with_message_when_saving_then_fails_with_message() -> Result<()> {
    let server = respond_with(json!({"code": 400, "message": "x"})).await;

    let outcome = save(server.uri(), "key", SaveMemoRequest::memo("T", "c")).await?;

    assert_eq!(outcome, SaveMemoOutcome::failed("x"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_rejection_without_message_when_saving_then_fails_with_unknown_error() -> Result<()> {
    let server = respond_with(json!({"code": -3030})).await;

    let outcome = save(server.uri(), "key", SaveMemoRequest::memo("T", "c")).await?;

    assert_eq!(outcome, SaveMemoOutcome::failed("Unknown error"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_server_error_status_when_saving_then_fails_with_status() -> Result<()> {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Act
    let outcome = save(server.uri(), "secret-key", SaveMemoRequest::memo("T", "c")).await?;

    // Assert
    assert!(!outcome.success);
    let error = outcome.error.expect("error text");
    assert!(error.contains("500"), "unexpected error: {error}");
    assert!(!error.contains("secret-key"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_html_body_when_saving_then_fails_with_malformed_response() -> Result<()> {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    // Act
    let outcome = save(server.uri(), "key", SaveMemoRequest::memo("T", "c")).await?;

    // Assert
    assert!(!outcome.success);
    assert!(outcome
        .error
        .expect("error text")
        .starts_with("Malformed response: "));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_unreachable_server_when_saving_then_fails_with_transport_error() -> Result<()> {
    // Arrange: nothing listens on port 1
    let uri = "http://127.0.0.1:1".to_string();

    // Act
    let outcome = save(uri, "secret-key", SaveMemoRequest::memo("T", "c")).await?;

    // Assert
    assert!(!outcome.success);
    let error = outcome.error.expect("error text");
    assert!(!error.is_empty());
    assert!(!error.contains("secret-key"));
    Ok(())
}
