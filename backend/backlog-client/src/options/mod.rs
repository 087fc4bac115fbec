//! Validated request options, grouped per resource.
//!
//! Every option is checked when it is applied, not when it is built, so a
//! service method can fail on the first bad option before anything is sent.
//! [`ActivityOption`], [`ProjectOption`] and [`WikiOption`] wrap the same
//! validators; the wrapper type is what keeps a wiki option out of an
//! activity call.

pub mod activity;
pub mod project;
pub mod wiki;

pub use activity::ActivityOption;
pub use project::ProjectOption;
pub use wiki::WikiOption;

use crate::error::BacklogError;
use crate::params::RequestParams;

pub const ORDER_ASC: &str = "asc";
pub const ORDER_DESC: &str = "desc";
pub const FORMAT_BACKLOG: &str = "backlog";
pub const FORMAT_MARKDOWN: &str = "markdown";

const MIN_ACTIVITY_TYPE_ID: i64 = 1;
const MAX_ACTIVITY_TYPE_ID: i64 = 26;
const MIN_COUNT: i64 = 1;
const MAX_COUNT: i64 = 100;

/// Something that can write itself into a [`RequestParams`].
///
/// On error nothing has been written.
pub trait ApplyOption {
    fn apply(&self, params: &mut RequestParams) -> Result<(), BacklogError>;
}

/// Applies `options` in order, stopping at the first failure.
pub(crate) fn apply_options<O: ApplyOption>(
    params: &mut RequestParams,
    options: &[O],
) -> Result<(), BacklogError> {
    for option in options {
        option.apply(params)?;
    }
    Ok(())
}

/// Shared validator behind every per-resource wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestOption {
    ActivityTypeIds(Vec<i64>),
    Archived(bool),
    ChartEnabled(bool),
    Content(String),
    Count(i64),
    Key(String),
    Name(String),
    MailNotify(bool),
    MaxId(i64),
    MinId(i64),
    Order(String),
    ProjectLeaderCanEditProjectLeader(bool),
    SubtaskingEnabled(bool),
    TextFormattingRule(String),
}

impl ApplyOption for RequestOption {
    #[track_caller]
    fn apply(&self, params: &mut RequestParams) -> Result<(), BacklogError> {
        match self {
            RequestOption::ActivityTypeIds(ids) => {
                let in_range = MIN_ACTIVITY_TYPE_ID..=MAX_ACTIVITY_TYPE_ID;
                if ids.iter().any(|id| !in_range.contains(id)) {
                    return Err(BacklogError::invalid_option(format!(
                        "activityTypeId must be between {MIN_ACTIVITY_TYPE_ID} and {MAX_ACTIVITY_TYPE_ID}"
                    )));
                }
                for id in ids {
                    params.add("activityTypeId[]", id.to_string());
                }
            }
            RequestOption::Archived(archived) => {
                params.set("archived", archived.to_string());
            }
            RequestOption::ChartEnabled(enabled) => {
                params.set("chartEnabled", enabled.to_string());
            }
            RequestOption::Content(content) => {
                set_non_empty(params, "content", content)?;
            }
            RequestOption::Count(count) => {
                if !(MIN_COUNT..=MAX_COUNT).contains(count) {
                    return Err(BacklogError::invalid_option(format!(
                        "count must be between {MIN_COUNT} and {MAX_COUNT}"
                    )));
                }
                params.set("count", count.to_string());
            }
            RequestOption::Key(key) => {
                set_non_empty(params, "key", key)?;
            }
            RequestOption::Name(name) => {
                set_non_empty(params, "name", name)?;
            }
            RequestOption::MailNotify(enabled) => {
                params.set("mailNotify", enabled.to_string());
            }
            RequestOption::MaxId(max_id) => {
                set_positive_id(params, "maxId", *max_id)?;
            }
            RequestOption::MinId(min_id) => {
                set_positive_id(params, "minId", *min_id)?;
            }
            RequestOption::Order(order) => {
                set_one_of(params, "order", "order", order, [ORDER_ASC, ORDER_DESC])?;
            }
            RequestOption::ProjectLeaderCanEditProjectLeader(enabled) => {
                params.set("projectLeaderCanEditProjectLeader", enabled.to_string());
            }
            RequestOption::SubtaskingEnabled(enabled) => {
                params.set("subtaskingEnabled", enabled.to_string());
            }
            RequestOption::TextFormattingRule(format) => {
                set_one_of(
                    params,
                    "textFormattingRule",
                    "format",
                    format,
                    [FORMAT_BACKLOG, FORMAT_MARKDOWN],
                )?;
            }
        }
        Ok(())
    }
}

#[track_caller]
fn set_non_empty(params: &mut RequestParams, key: &str, value: &str) -> Result<(), BacklogError> {
    if value.is_empty() {
        return Err(BacklogError::invalid_option(format!("{key} must not be empty")));
    }
    params.set(key, value);
    Ok(())
}

#[track_caller]
fn set_positive_id(params: &mut RequestParams, key: &str, id: i64) -> Result<(), BacklogError> {
    if id < 1 {
        return Err(BacklogError::invalid_option(format!("{key} must be greater than 1")));
    }
    params.set(key, id.to_string());
    Ok(())
}

#[track_caller]
fn set_one_of(
    params: &mut RequestParams,
    key: &str,
    label: &str,
    value: &str,
    allowed: [&str; 2],
) -> Result<(), BacklogError> {
    if !allowed.contains(&value) {
        return Err(BacklogError::invalid_option(format!(
            "{label} must be only '{}' or '{}'",
            allowed[0], allowed[1]
        )));
    }
    params.set(key, value);
    Ok(())
}
