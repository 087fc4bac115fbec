use crate::error::BacklogError;
use crate::options::{ApplyOption, RequestOption};
use crate::params::RequestParams;

/// Options accepted when listing, creating, or updating projects.
///
/// A project option cannot be handed to a wiki endpoint:
///
/// ```compile_fail
/// use backlog_client::{Client, ProjectOption};
///
/// async fn rename(client: &Client) {
///     let _ = client.wiki.update(1, &[ProjectOption::name("Renamed")]).await;
/// }
/// ```
///
/// ```no_run
/// use backlog_client::{Client, WikiOption};
///
/// async fn rename(client: &Client) {
///     let _ = client.wiki.update(1, &[WikiOption::name("Renamed")]).await;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOption(RequestOption);

impl ProjectOption {
    pub fn key(key: impl Into<String>) -> Self {
        Self(RequestOption::Key(key.into()))
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self(RequestOption::Name(name.into()))
    }

    pub fn chart_enabled(enabled: bool) -> Self {
        Self(RequestOption::ChartEnabled(enabled))
    }

    pub fn subtasking_enabled(enabled: bool) -> Self {
        Self(RequestOption::SubtaskingEnabled(enabled))
    }

    pub fn project_leader_can_edit_project_leader(enabled: bool) -> Self {
        Self(RequestOption::ProjectLeaderCanEditProjectLeader(enabled))
    }

    /// [`FORMAT_BACKLOG`](crate::FORMAT_BACKLOG) or [`FORMAT_MARKDOWN`](crate::FORMAT_MARKDOWN).
    pub fn text_formatting_rule(format: impl Into<String>) -> Self {
        Self(RequestOption::TextFormattingRule(format.into()))
    }

    pub fn archived(archived: bool) -> Self {
        Self(RequestOption::Archived(archived))
    }
}

impl ApplyOption for ProjectOption {
    #[track_caller]
    fn apply(&self, params: &mut RequestParams) -> Result<(), BacklogError> {
        self.0.apply(params)
    }
}
