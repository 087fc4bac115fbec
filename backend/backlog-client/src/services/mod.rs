//! Resource façades over [`RequestMethods`](crate::RequestMethods).
//!
//! Each service turns identifiers into an endpoint path, folds options into a
//! [`RequestParams`](crate::RequestParams), calls one verb, and decodes the
//! body. Integer ids are written in decimal; string keys are inserted as given.

pub mod activity;
pub mod attachment;
pub mod issue;
pub mod project;
pub mod pull_request;
pub mod space;
pub mod user;
pub mod wiki;

pub use activity::ActivityService;
pub use attachment::{IssueAttachmentService, PullRequestAttachmentService, WikiAttachmentService};
pub use issue::IssueService;
pub use project::ProjectService;
pub use pull_request::PullRequestService;
pub use space::SpaceService;
pub use user::UserService;
pub use wiki::WikiService;

use crate::error::BacklogError;
use crate::transport::RequestMethods;

use models::Attachment;

use std::path::Path;

const SPACE_ATTACHMENT_PATH: &str = "space/attachment";

/// Update endpoints reject an empty form, so fail before sending one.
#[track_caller]
pub(crate) fn require_options<O>(options: &[O]) -> Result<(), BacklogError> {
    if options.is_empty() {
        return Err(BacklogError::invalid_option("requires one or more options"));
    }
    Ok(())
}

/// `POST space/attachment`. Every attachment-bearing service uploads here; the
/// returned id is then bound to a wiki page, issue, or pull request.
pub(crate) async fn upload_to_space<M: RequestMethods>(
    methods: &M,
    file_path: &Path,
    file_name: &str,
) -> Result<Attachment, BacklogError> {
    methods
        .upload(SPACE_ATTACHMENT_PATH, file_path, file_name)
        .await?
        .json()
}
