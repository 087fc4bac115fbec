use crate::helpers::{client_for, only_request, query_values};

use backlog_client::{
    ActivityOption, BacklogError, FORMAT_MARKDOWN, ORDER_ASC, ProjectOption, WikiOption,
};

use serde_json::json;
use wiremock::matchers::{any, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a catch-all that fails the test if any request arrives.
async fn refuse_all_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// **VALUE**: Verifies an out-of-range count is rejected locally.
///
/// **WHY THIS MATTERS**: A rejected option must not cost a round trip or
/// produce a half-applied request.
///
/// **BUG THIS CATCHES**: Would catch validation happening after the request
/// was sent.
#[tokio::test]
async fn given_count_zero_when_listing_activities_then_fails_without_request() {
    // GIVEN: A server that must not be contacted
    let server = MockServer::start().await;
    refuse_all_requests(&server).await;
    let client = client_for(&server);

    // WHEN: Listing with count 0
    let err = client
        .activity
        .space(&[ActivityOption::count(0)])
        .await
        .unwrap_err();

    // THEN: Argument error naming the bounds
    assert!(matches!(err, BacklogError::InvalidOption { .. }));
    assert!(err.to_string().contains("count must be between 1 and 100"));
    assert_eq!(err.error_category(), "argument");
}

#[tokio::test]
async fn given_unknown_order_when_listing_then_fails_without_request() {
    let server = MockServer::start().await;
    refuse_all_requests(&server).await;
    let client = client_for(&server);

    let err = client
        .activity
        .project("PRJ", &[ActivityOption::order("sideways")])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("order must be only 'asc' or 'desc'"));
}

#[tokio::test]
async fn given_activity_options_when_listing_then_query_carries_them_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/7/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "type": 1, "content": {"summary": "first"}},
            {"id": 11, "type": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let activities = client
        .activity
        .user(
            7,
            &[
                ActivityOption::activity_type_ids(vec![1, 2]),
                ActivityOption::count(20),
                ActivityOption::order(ORDER_ASC),
            ],
        )
        .await
        .unwrap();

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].activity_type, 1);
    assert_eq!(activities[0].content["summary"], "first");

    let request = only_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some("activityTypeId%5B%5D=1&activityTypeId%5B%5D=2&count=20&order=asc&apiKey=T")
    );
}

/// **VALUE**: Verifies the wiki attach call end to end.
///
/// **WHY THIS MATTERS**: Attaching is how uploaded files become visible on a
/// page; the ids must arrive as repeated `attachmentId[]` form fields.
#[tokio::test]
async fn given_attachment_ids_when_attaching_to_wiki_then_posts_repeated_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/wikis/42/attachments"))
        .and(body_string("attachmentId%5B%5D=1&attachmentId%5B%5D=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "a.png", "size": 10},
            {"id": 2, "name": "b.png", "size": 20}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let attached = client.wiki.attachment.attach(42, &[1, 2]).await.unwrap();

    assert_eq!(
        attached.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[tokio::test]
async fn given_no_attachment_ids_when_attaching_then_fails_without_request() {
    let server = MockServer::start().await;
    refuse_all_requests(&server).await;
    let client = client_for(&server);

    let err = client.wiki.attachment.attach(42, &[]).await.unwrap_err();

    assert!(matches!(err, BacklogError::InvalidOption { .. }));
}

#[tokio::test]
async fn given_pull_request_attachment_when_removed_then_path_includes_attachment_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(
            "/api/v2/projects/PRJ/git/repositories/app/pullRequests/3/attachments/99",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 99, "name": "log.txt", "size": 5})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let removed = client
        .pull_request
        .attachment
        .remove("PRJ", "app", 3, 99)
        .await
        .unwrap();

    assert_eq!(removed.id, 99);
}

#[tokio::test]
async fn given_issue_key_when_listing_attachments_then_hits_issue_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/issues/PRJ-1/attachments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let attachments = client.issue.attachment.list("PRJ-1").await.unwrap();

    assert!(attachments.is_empty());
}

#[tokio::test]
async fn given_wiki_keyword_when_listing_then_query_has_project_and_keyword() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/wikis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "projectId": 5, "name": "Home"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let wikis = client.wiki.all("PRJ", Some("release notes")).await.unwrap();

    assert_eq!(wikis[0].name, "Home");
    assert!(wikis[0].content.is_empty());
    let request = only_request(&server).await;
    assert_eq!(query_values(&request, "projectIdOrKey"), vec!["PRJ"]);
    assert_eq!(query_values(&request, "keyword"), vec!["release notes"]);
}

#[tokio::test]
async fn given_wiki_count_response_when_counting_then_returns_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/wikis/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 12})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    assert_eq!(client.wiki.count("PRJ").await.unwrap(), 12);
}

#[tokio::test]
async fn given_wiki_fields_when_created_then_form_has_project_name_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/wikis"))
        .and(body_string("projectId=5&name=Home&content=Hello+world&mailNotify=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "projectId": 5, "name": "Home", "content": "Hello world"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let wiki = client
        .wiki
        .create(5, "Home", "Hello world", &[WikiOption::mail_notify(true)])
        .await
        .unwrap();

    assert_eq!(wiki.content, "Hello world");
}

#[tokio::test]
async fn given_no_options_when_updating_wiki_then_fails_without_request() {
    let server = MockServer::start().await;
    refuse_all_requests(&server).await;
    let client = client_for(&server);

    let err = client.wiki.update(1, &[]).await.unwrap_err();

    assert!(matches!(err, BacklogError::InvalidOption { .. }));
}

#[tokio::test]
async fn given_project_options_when_updating_then_patches_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/projects/PRJ"))
        .and(body_string("name=Renamed&textFormattingRule=markdown&archived=false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "projectKey": "PRJ", "name": "Renamed", "textFormattingRule": "markdown"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let project = client
        .project
        .update(
            "PRJ",
            &[
                ProjectOption::name("Renamed"),
                ProjectOption::text_formatting_rule(FORMAT_MARKDOWN),
                ProjectOption::archived(false),
            ],
        )
        .await
        .unwrap();

    assert_eq!(project.name, "Renamed");
    assert_eq!(project.text_formatting_rule.as_deref(), Some("markdown"));
}

#[tokio::test]
async fn given_myself_when_requested_then_decodes_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/myself"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "userId": "admin", "name": "Admin", "roleType": 1
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let me = client.user.myself().await.unwrap();

    assert_eq!(me.user_id.as_deref(), Some("admin"));
    assert_eq!(me.role_type, 1);
}
