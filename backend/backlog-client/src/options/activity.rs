use crate::error::BacklogError;
use crate::options::{ApplyOption, RequestOption};
use crate::params::RequestParams;

/// Options accepted by activity feeds (space, user, project).
///
/// ```no_run
/// use backlog_client::{ActivityOption, Client};
///
/// async fn recent(client: &Client) {
///     let _ = client.activity.space(&[ActivityOption::count(20)]).await;
/// }
/// ```
///
/// Options of other resources are a different type and do not compile here:
///
/// ```compile_fail
/// use backlog_client::{Client, WikiOption};
///
/// async fn recent(client: &Client) {
///     let _ = client.activity.space(&[WikiOption::mail_notify(true)]).await;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOption(RequestOption);

impl ActivityOption {
    /// `activityTypeId[]`, each id in 1..=26. One bad id rejects the whole list.
    pub fn activity_type_ids(type_ids: impl Into<Vec<i64>>) -> Self {
        Self(RequestOption::ActivityTypeIds(type_ids.into()))
    }

    /// `minId`, at least 1.
    pub fn min_id(min_id: i64) -> Self {
        Self(RequestOption::MinId(min_id))
    }

    /// `maxId`, at least 1.
    pub fn max_id(max_id: i64) -> Self {
        Self(RequestOption::MaxId(max_id))
    }

    /// `count`, 1..=100.
    pub fn count(count: i64) -> Self {
        Self(RequestOption::Count(count))
    }

    /// `order`, [`ORDER_ASC`](crate::ORDER_ASC) or [`ORDER_DESC`](crate::ORDER_DESC).
    pub fn order(order: impl Into<String>) -> Self {
        Self(RequestOption::Order(order.into()))
    }
}

impl ApplyOption for ActivityOption {
    #[track_caller]
    fn apply(&self, params: &mut RequestParams) -> Result<(), BacklogError> {
        self.0.apply(params)
    }
}
