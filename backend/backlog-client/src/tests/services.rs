// Unit tests for service path building and option plumbing.
// Services run against RecordingMethods, so no network is involved.

use super::recording::RecordingMethods;

use crate::error::BacklogError;
use crate::options::{ActivityOption, ProjectOption, WikiOption};
use crate::services::{
    ActivityService, IssueService, ProjectService, PullRequestService, SpaceService, UserService,
    WikiService,
};

use std::path::PathBuf;

const ATTACHMENT: &str = r#"{"id":8,"name":"a.png","size":10}"#;
const ATTACHMENTS: &str = r#"[{"id":1,"name":"a.png","size":10},{"id":2,"name":"b.png","size":20}]"#;
const PROJECT: &str = r#"{"id":1,"projectKey":"TEST","name":"test"}"#;
const WIKI: &str = r#"{"id":42,"projectId":1,"name":"Home","content":"hi"}"#;

/// **VALUE**: Verifies wiki attach posts every id as a repeated `attachmentId[]`.
///
/// **WHY THIS MATTERS**: Attaching is how uploaded space files become visible
/// on a page. Dropping an id silently leaves a file orphaned.
///
/// **BUG THIS CATCHES**: Would catch `set` used instead of `add`.
#[tokio::test]
async fn given_two_ids_when_attaching_to_wiki_then_posts_repeated_array_param() {
    // GIVEN: A wiki service over the recorder
    let methods = RecordingMethods::replying(ATTACHMENTS);
    let wiki = WikiService::new(methods.clone());

    // WHEN: Attaching two uploaded files
    let attached = wiki.attachment.attach(42, &[1, 2]).await.unwrap();

    // THEN: One POST with both ids, in order
    let call = methods.only_call();
    assert_eq!(call.verb, "POST");
    assert_eq!(call.path, "wikis/42/attachments");
    assert_eq!(call.params.encode(), "attachmentId%5B%5D=1&attachmentId%5B%5D=2");
    assert_eq!(attached.len(), 2);
    assert_eq!(attached[1].id, 2);
}

#[tokio::test]
async fn given_wiki_attachment_calls_when_listing_and_removing_then_paths_embed_ids() {
    let methods = RecordingMethods::replying(ATTACHMENTS);
    let wiki = WikiService::new(methods.clone());
    wiki.attachment.list(42).await.unwrap();

    let removal = RecordingMethods::replying(ATTACHMENT);
    let wiki = WikiService::new(removal.clone());
    let removed = wiki.attachment.remove(42, 8).await.unwrap();

    assert_eq!(methods.only_call().path, "wikis/42/attachments");
    let call = removal.only_call();
    assert_eq!(call.verb, "DELETE");
    assert_eq!(call.path, "wikis/42/attachments/8");
    assert_eq!(removed.id, 8);
}

#[tokio::test]
async fn given_issue_key_when_listing_attachments_then_key_is_embedded_literally() {
    let methods = RecordingMethods::replying(ATTACHMENTS);
    let issue = IssueService::new(methods.clone());

    issue.attachment.list("BLG-12").await.unwrap();

    let call = methods.only_call();
    assert_eq!(call.verb, "GET");
    assert_eq!(call.path, "issues/BLG-12/attachments");
    assert!(call.params.is_empty());
}

#[tokio::test]
async fn given_issue_attachment_when_removed_then_deletes_by_id() {
    let methods = RecordingMethods::replying(ATTACHMENT);
    let issue = IssueService::new(methods.clone());

    issue.attachment.remove("BLG-12", 8).await.unwrap();

    let call = methods.only_call();
    assert_eq!((call.verb, call.path.as_str()), ("DELETE", "issues/BLG-12/attachments/8"));
}

/// **VALUE**: Verifies the pull request removal path ends with the attachment id.
///
/// **BUG THIS CATCHES**: Would catch a DELETE aimed at the collection path,
/// which the API answers with 405 instead of removing the file.
#[tokio::test]
async fn given_pull_request_attachment_when_removed_then_path_includes_attachment_id() {
    let listing = RecordingMethods::replying(ATTACHMENTS);
    PullRequestService::new(listing.clone())
        .attachment
        .list("PRJ", "repo", 3)
        .await
        .unwrap();

    let removal = RecordingMethods::replying(ATTACHMENT);
    PullRequestService::new(removal.clone())
        .attachment
        .remove("PRJ", "repo", 3, 8)
        .await
        .unwrap();

    assert_eq!(
        listing.only_call().path,
        "projects/PRJ/git/repositories/repo/pullRequests/3/attachments"
    );
    assert_eq!(
        removal.only_call().path,
        "projects/PRJ/git/repositories/repo/pullRequests/3/attachments/8"
    );
}

#[tokio::test]
async fn given_file_when_uploading_to_space_then_uses_space_attachment_path() {
    let methods = RecordingMethods::replying(ATTACHMENT);
    let space = SpaceService::new(methods.clone());

    let attachment = space.upload_attachment("/tmp/a.png", "a.png").await.unwrap();

    let call = methods.only_call();
    assert_eq!(call.verb, "UPLOAD");
    assert_eq!(call.path, "space/attachment");
    assert_eq!(call.upload, Some((PathBuf::from("/tmp/a.png"), "a.png".to_string())));
    assert_eq!(attachment.name, "a.png");
}

/// **VALUE**: Verifies every attachment service can upload, and all of them
/// upload to the space.
///
/// **WHY THIS MATTERS**: Backlog has one upload endpoint. A caller holding
/// only `client.issue` must not need `client.space` to add a file.
///
/// **BUG THIS CATCHES**: Would catch an attachment service uploading to a
/// resource-specific path that does not exist.
#[tokio::test]
async fn given_attachment_services_when_uploading_then_all_post_to_space_attachment() {
    // GIVEN: One recorder shared by the three attachment-bearing services
    let methods = RecordingMethods::replying(ATTACHMENT);
    let wiki = WikiService::new(methods.clone());
    let issue = IssueService::new(methods.clone());
    let pull_request = PullRequestService::new(methods.clone());

    // WHEN: Uploading through each of them
    wiki.attachment.upload("/tmp/w.png", "w.png").await.unwrap();
    issue.attachment.upload("/tmp/i.log", "i.log").await.unwrap();
    let uploaded = pull_request
        .attachment
        .upload("/tmp/p.diff", "p.diff")
        .await
        .unwrap();

    // THEN: Three uploads, all to space/attachment, each with its own file
    let calls = methods.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|call| call.verb == "UPLOAD"));
    assert!(calls.iter().all(|call| call.path == "space/attachment"));
    assert_eq!(
        calls[1].upload,
        Some((PathBuf::from("/tmp/i.log"), "i.log".to_string()))
    );
    assert_eq!(uploaded.id, 8);
}

/// **VALUE**: Verifies a bad option aborts before any verb runs.
///
/// **WHY THIS MATTERS**: Invalid filters must never reach the server, and the
/// caller must get the validation message, not an HTTP error.
///
/// **BUG THIS CATCHES**: Would catch a service that dispatches first and
/// validates later, or ignores the option result.
#[tokio::test]
async fn given_invalid_activity_option_when_listing_then_no_request_is_made() {
    let methods = RecordingMethods::replying("[]");
    let activity = ActivityService::new(methods.clone());

    let err = activity
        .space(&[ActivityOption::count(20), ActivityOption::count(0)])
        .await
        .unwrap_err();

    assert!(matches!(err, BacklogError::InvalidOption { .. }));
    assert!(methods.calls().is_empty(), "No verb should run");
}

#[tokio::test]
async fn given_activity_options_when_listing_user_feed_then_params_reach_get() {
    let methods = RecordingMethods::replying(r#"[{"id":1,"type":2}]"#);
    let activity = ActivityService::new(methods.clone());

    let feed = activity
        .user(
            7,
            &[
                ActivityOption::activity_type_ids(vec![1, 2]),
                ActivityOption::min_id(10),
                ActivityOption::order("asc"),
            ],
        )
        .await
        .unwrap();

    let call = methods.only_call();
    assert_eq!(call.path, "users/7/activities");
    assert_eq!(
        call.params.encode(),
        "activityTypeId%5B%5D=1&activityTypeId%5B%5D=2&minId=10&order=asc"
    );
    assert_eq!(feed[0].activity_type, 2);
}

#[tokio::test]
async fn given_project_key_when_listing_project_feed_then_path_uses_key() {
    let methods = RecordingMethods::replying("[]");
    ActivityService::new(methods.clone())
        .project("TEST", &[])
        .await
        .unwrap();

    assert_eq!(methods.only_call().path, "projects/TEST/activities");
}

#[tokio::test]
async fn given_key_and_name_when_creating_project_then_both_precede_options() {
    let methods = RecordingMethods::replying(PROJECT);
    let project = ProjectService::new(methods.clone());

    let created = project
        .create("TEST", "test", &[ProjectOption::chart_enabled(true)])
        .await
        .unwrap();

    let call = methods.only_call();
    assert_eq!(call.verb, "POST");
    assert_eq!(call.path, "projects");
    assert_eq!(call.params.encode(), "key=TEST&name=test&chartEnabled=true");
    assert_eq!(created.project_key, "TEST");
}

#[tokio::test]
async fn given_no_options_when_updating_project_then_rejected_locally() {
    let methods = RecordingMethods::replying(PROJECT);
    let project = ProjectService::new(methods.clone());

    let err = project.update("TEST", &[]).await.unwrap_err();

    assert!(err.to_string().contains("requires one or more options"));
    assert!(methods.calls().is_empty());
}

#[tokio::test]
async fn given_archived_filter_when_listing_projects_then_sent_as_query_param() {
    let methods = RecordingMethods::replying(&format!("[{PROJECT}]"));
    let project = ProjectService::new(methods.clone());

    project.all(&[ProjectOption::archived(false)]).await.unwrap();
    ProjectService::new(methods.clone()).delete("TEST").await.unwrap();

    let calls = methods.calls();
    assert_eq!(calls[0].params.encode(), "archived=false");
    assert_eq!((calls[1].verb, calls[1].path.as_str()), ("DELETE", "projects/TEST"));
}

#[tokio::test]
async fn given_wiki_fields_when_creating_then_project_name_and_content_are_sent() {
    let methods = RecordingMethods::replying(WIKI);
    let wiki = WikiService::new(methods.clone());

    wiki.create(1, "Home", "hi", &[WikiOption::mail_notify(true)])
        .await
        .unwrap();

    let call = methods.only_call();
    assert_eq!(call.path, "wikis");
    assert_eq!(call.params.encode(), "projectId=1&name=Home&content=hi&mailNotify=true");
}

#[tokio::test]
async fn given_empty_wiki_name_when_creating_then_fails_before_sending() {
    let methods = RecordingMethods::replying(WIKI);
    let wiki = WikiService::new(methods.clone());

    let err = wiki.create(1, "", "hi", &[]).await.unwrap_err();

    assert!(err.to_string().contains("name must not be empty"));
    assert!(methods.calls().is_empty());
}

#[tokio::test]
async fn given_wiki_queries_when_called_then_project_filter_is_in_params() {
    let methods = RecordingMethods::replying(r#"{"count": 3}"#);
    let count = WikiService::new(methods.clone()).count("TEST").await.unwrap();

    let listing = RecordingMethods::replying(&format!("[{WIKI}]"));
    WikiService::new(listing.clone())
        .all("TEST", Some("meeting"))
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(methods.only_call().path, "wikis/count");
    assert_eq!(listing.only_call().params.encode(), "projectIdOrKey=TEST&keyword=meeting");
}

#[tokio::test]
async fn given_wiki_update_and_delete_when_called_then_use_patch_and_delete() {
    let methods = RecordingMethods::replying(WIKI);
    let wiki = WikiService::new(methods.clone());

    wiki.update(42, &[WikiOption::content("new")]).await.unwrap();
    wiki.delete(42, &[WikiOption::mail_notify(false)]).await.unwrap();
    wiki.one(42).await.unwrap();

    let calls = methods.calls();
    assert_eq!((calls[0].verb, calls[0].path.as_str()), ("PATCH", "wikis/42"));
    assert_eq!(calls[0].params.encode(), "content=new");
    assert_eq!((calls[1].verb, calls[1].path.as_str()), ("DELETE", "wikis/42"));
    assert_eq!(calls[1].params.encode(), "mailNotify=false");
    assert_eq!((calls[2].verb, calls[2].path.as_str()), ("GET", "wikis/42"));
}

#[tokio::test]
async fn given_user_service_when_called_then_paths_match_endpoints() {
    let methods = RecordingMethods::replying(r#"{"id":1,"name":"Admin"}"#);
    let user = UserService::new(methods.clone());

    user.one(1).await.unwrap();
    user.myself().await.unwrap();

    let paths: Vec<String> = methods.calls().into_iter().map(|c| c.path).collect();
    assert_eq!(paths, vec!["users/1", "users/myself"]);
}

#[tokio::test]
async fn given_malformed_body_when_decoding_then_returns_json_error() {
    let methods = RecordingMethods::replying("not json");
    let user = UserService::new(methods.clone());

    let err = user.all().await.unwrap_err();

    assert!(matches!(err, BacklogError::Json { .. }));
    assert_eq!(err.error_category(), "decode");
}
