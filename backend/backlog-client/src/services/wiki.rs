use crate::error::BacklogError;
use crate::options::{ApplyOption, WikiOption, apply_options};
use crate::params::RequestParams;
use crate::services::attachment::WikiAttachmentService;
use crate::services::require_options;
use crate::transport::{RequestMethods, Transport};

use models::{Wiki, WikiCount};

use std::sync::Arc;

const PROJECT_ID_OR_KEY_PARAM: &str = "projectIdOrKey";

#[derive(Debug, Clone)]
pub struct WikiService<M = Transport> {
    methods: Arc<M>,
    pub attachment: WikiAttachmentService<M>,
}

impl<M: RequestMethods> WikiService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self {
            attachment: WikiAttachmentService::new(Arc::clone(&methods)),
            methods,
        }
    }

    /// `GET wikis?projectIdOrKey=…[&keyword=…]`
    pub async fn all(
        &self,
        project_id_or_key: &str,
        keyword: Option<&str>,
    ) -> Result<Vec<Wiki>, BacklogError> {
        let mut params = RequestParams::new();
        params.set(PROJECT_ID_OR_KEY_PARAM, project_id_or_key);
        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            params.set("keyword", keyword);
        }

        self.methods.get("wikis", params).await?.json()
    }

    /// `GET wikis/count?projectIdOrKey=…`
    pub async fn count(&self, project_id_or_key: &str) -> Result<i64, BacklogError> {
        let mut params = RequestParams::new();
        params.set(PROJECT_ID_OR_KEY_PARAM, project_id_or_key);

        let count: WikiCount = self.methods.get("wikis/count", params).await?.json()?;
        Ok(count.count)
    }

    /// `GET wikis/{wiki_id}`
    pub async fn one(&self, wiki_id: i64) -> Result<Wiki, BacklogError> {
        self.methods
            .get(&format!("wikis/{wiki_id}"), RequestParams::new())
            .await?
            .json()
    }

    /// `POST wikis`. `name` and `content` must not be empty.
    pub async fn create(
        &self,
        project_id: i64,
        name: &str,
        content: &str,
        options: &[WikiOption],
    ) -> Result<Wiki, BacklogError> {
        let mut params = RequestParams::new();
        params.set("projectId", project_id.to_string());
        WikiOption::name(name).apply(&mut params)?;
        WikiOption::content(content).apply(&mut params)?;
        apply_options(&mut params, options)?;

        self.methods.post("wikis", params).await?.json()
    }

    /// `PATCH wikis/{wiki_id}`. At least one option is required.
    pub async fn update(&self, wiki_id: i64, options: &[WikiOption]) -> Result<Wiki, BacklogError> {
        require_options(options)?;
        let mut params = RequestParams::new();
        apply_options(&mut params, options)?;

        self.methods
            .patch(&format!("wikis/{wiki_id}"), params)
            .await?
            .json()
    }

    /// `DELETE wikis/{wiki_id}`. Accepts [`WikiOption::mail_notify`].
    pub async fn delete(&self, wiki_id: i64, options: &[WikiOption]) -> Result<Wiki, BacklogError> {
        let mut params = RequestParams::new();
        apply_options(&mut params, options)?;

        self.methods
            .delete(&format!("wikis/{wiki_id}"), params)
            .await?
            .json()
    }
}
