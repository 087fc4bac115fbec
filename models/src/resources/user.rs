use serde::{Deserialize, Serialize};

/// A member of the space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    /// Login id; absent for bot users.
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role_type: i32,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub mail_address: Option<String>,
}
