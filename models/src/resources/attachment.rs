use crate::User;

use serde::{Deserialize, Serialize};

/// A file uploaded to the space, or bound to a wiki page, issue, or pull request.
///
/// `space/attachment` answers with only `id`, `name` and `size`; the bound
/// variants also carry the uploader and a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: i64,
    pub name: String,
    pub size: i64,
    #[serde(default)]
    pub created_user: Option<User>,
    #[serde(default)]
    pub created: Option<String>,
}
