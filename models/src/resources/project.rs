use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub project_key: String,
    pub name: String,
    #[serde(default)]
    pub chart_enabled: bool,
    #[serde(default)]
    pub subtasking_enabled: bool,
    #[serde(default)]
    pub project_leader_can_edit_project_leader: bool,
    /// `"backlog"` or `"markdown"`.
    #[serde(default)]
    pub text_formatting_rule: Option<String>,
    #[serde(default)]
    pub archived: bool,
}
