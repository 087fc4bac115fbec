use crate::{Project, User};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of an activity feed.
///
/// `activity_type` is the numeric type id (1 through 26). The shape of
/// `content` depends on that type, so it stays untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(rename = "type")]
    pub activity_type: i32,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub created_user: Option<User>,
    #[serde(default)]
    pub created: Option<String>,
}
