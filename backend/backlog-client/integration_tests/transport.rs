use crate::helpers::{TEST_API_KEY, client_for, header, only_request, query_values};

use backlog_client::{BacklogError, RequestMethods, RequestParams, Transport};

use std::io::Write;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string, header as header_is, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the exact shape of a GET: URL, query, headers, body.
///
/// **WHY THIS MATTERS**: GET is the only verb that carries parameters in the
/// query string. Sending a form body or a Content-Type on GET breaks some
/// proxies in front of Backlog spaces.
///
/// **BUG THIS CATCHES**: Would catch the form branch being used for GET.
#[tokio::test]
async fn given_get_without_params_when_sent_then_only_api_key_in_query_and_no_body() {
    // GIVEN: A server answering GET /api/v2/users
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users"))
        .and(query_param("apiKey", TEST_API_KEY))
        .and(header_is("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Calling the raw verb
    let response = client
        .transport()
        .get("users", RequestParams::new())
        .await
        .unwrap();

    // THEN: Query holds only the key; there is no body and no Content-Type
    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("apiKey=T"));
    assert!(request.body.is_empty());
    assert!(header(&request, "content-type").is_none());
    assert_eq!(response.body(), b"[]");
}

#[tokio::test]
async fn given_get_with_params_when_sent_then_params_join_api_key_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/space/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut params = RequestParams::new();
    params.add("activityTypeId[]", "1").add("activityTypeId[]", "2");
    client.transport().get("space/activities", params).await.unwrap();

    let request = only_request(&server).await;
    assert_eq!(query_values(&request, "activityTypeId[]"), vec!["1", "2"]);
    assert_eq!(query_values(&request, "apiKey"), vec![TEST_API_KEY]);
}

/// **VALUE**: Verifies POST puts parameters in a form body, never the query.
///
/// **WHY THIS MATTERS**: Backlog ignores form fields sent in the query string
/// for write endpoints, so a misplaced `attachmentId[]` attaches nothing.
///
/// **BUG THIS CATCHES**: Would catch parameters leaking into the query, or
/// the Content-Type header going missing.
#[tokio::test]
async fn given_post_with_array_params_when_sent_then_params_are_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/wikis/42/attachments"))
        .and(header_is("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("attachmentId%5B%5D=1&attachmentId%5B%5D=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut params = RequestParams::new();
    params.add("attachmentId[]", "1").add("attachmentId[]", "2");
    client
        .transport()
        .post("wikis/42/attachments", params)
        .await
        .unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("apiKey=T"));
    assert_eq!(header(&request, "accept"), Some("application/json"));
}

#[tokio::test]
async fn given_patch_and_delete_when_sent_then_both_use_form_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/wikis/42"))
        .and(body_string("content=new+text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/wikis/42"))
        .and(header_is("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("mailNotify=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let transport = Transport::new(&server.uri(), TEST_API_KEY).unwrap();

    let mut patch = RequestParams::new();
    patch.set("content", "new text");
    let mut delete = RequestParams::new();
    delete.set("mailNotify", "true");

    transport.patch("wikis/42", patch).await.unwrap();
    transport.delete("wikis/42", delete).await.unwrap();
}

/// **VALUE**: Verifies the multipart upload carries one `file` part with the
/// given file name and the file's bytes.
///
/// **WHY THIS MATTERS**: The space rejects uploads whose part is not named
/// `file`, and uses the part's filename as the attachment name.
///
/// **BUG THIS CATCHES**: Would catch a wrong field name, a dropped filename,
/// or a hand-set Content-Type without the boundary.
#[tokio::test]
async fn given_file_when_uploaded_then_multipart_part_is_named_file() {
    // GIVEN: A file on disk and a server accepting uploads
    let mut source = tempfile::NamedTempFile::new().unwrap();
    source.write_all(b"PNG-BYTES-123").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/space/attachment"))
        .and(query_param("apiKey", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "name": "a.png", "size": 13})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Uploading through the space service
    let attachment = client
        .space
        .upload_attachment(source.path(), "a.png")
        .await
        .unwrap();

    // THEN: One multipart part named "file" with the supplied file name
    let request = only_request(&server).await;
    let content_type = header(&request, "content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="file"; filename="a.png""#));
    assert!(body.contains("PNG-BYTES-123"));
    assert_eq!(body.matches("Content-Disposition").count(), 1);
    assert_eq!(request.url.query(), Some("apiKey=T"));
    assert_eq!(attachment.id, 1);
}

/// **VALUE**: Verifies a structured 403 comes back as an API error with the
/// server's message and code.
///
/// **WHY THIS MATTERS**: Permission problems are the most common failure for
/// API keys; callers branch on the code.
#[tokio::test]
async fn given_forbidden_with_envelope_when_called_then_error_has_message_and_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/projects"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{"message": "no permission", "code": 11, "moreInfo": ""}]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.project.all(&[]).await.unwrap_err();

    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.api_errors().unwrap().codes(), vec![11]);
    let text = err.to_string();
    assert!(text.contains("no permission"));
    assert!(text.contains("11"));
}

#[tokio::test]
async fn given_error_status_with_empty_body_when_called_then_returns_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.wiki.attachment.remove(1, 2).await.unwrap_err();

    assert!(matches!(err, BacklogError::EmptyBody { .. }));
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn given_error_status_with_malformed_body_when_called_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.user.all().await.unwrap_err();

    assert!(matches!(err, BacklogError::Json { .. }));
}

/// **VALUE**: Verifies the transport timeout bounds a hung call.
///
/// **WHY THIS MATTERS**: Without a deadline a stuck space blocks the caller
/// forever.
///
/// **BUG THIS CATCHES**: Would catch `with_settings` ignoring its timeout.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_returns_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let transport = Transport::with_settings(
        &server.uri(),
        TEST_API_KEY,
        Duration::from_millis(200),
        "backlog-client-tests",
    )
    .unwrap();

    let err = transport.get("users", RequestParams::new()).await.unwrap_err();

    match &err {
        BacklogError::Http { source, .. } => assert!(source.is_timeout()),
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(err.error_category(), "transport");
}

#[tokio::test]
async fn given_custom_user_agent_when_sent_then_header_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_is("user-agent", "backlog-client-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let transport = Transport::with_settings(
        &server.uri(),
        TEST_API_KEY,
        Duration::from_secs(5),
        "backlog-client-tests",
    )
    .unwrap();

    transport.get("users", RequestParams::new()).await.unwrap();
}
