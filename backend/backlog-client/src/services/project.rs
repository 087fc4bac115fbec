use crate::error::BacklogError;
use crate::options::{ApplyOption, ProjectOption, apply_options};
use crate::params::RequestParams;
use crate::services::require_options;
use crate::transport::{RequestMethods, Transport};

use models::Project;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ProjectService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> ProjectService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// `GET projects`. Typically filtered with [`ProjectOption::archived`].
    pub async fn all(&self, options: &[ProjectOption]) -> Result<Vec<Project>, BacklogError> {
        let mut params = RequestParams::new();
        apply_options(&mut params, options)?;

        self.methods.get("projects", params).await?.json()
    }

    /// `GET projects/{project_id_or_key}`
    pub async fn one(&self, project_id_or_key: &str) -> Result<Project, BacklogError> {
        self.methods
            .get(&format!("projects/{project_id_or_key}"), RequestParams::new())
            .await?
            .json()
    }

    /// `POST projects`. `key` and `name` are required; `options` follow them
    /// and may override either.
    pub async fn create(
        &self,
        key: &str,
        name: &str,
        options: &[ProjectOption],
    ) -> Result<Project, BacklogError> {
        let mut params = RequestParams::new();
        ProjectOption::key(key).apply(&mut params)?;
        ProjectOption::name(name).apply(&mut params)?;
        apply_options(&mut params, options)?;

        self.methods.post("projects", params).await?.json()
    }

    /// `PATCH projects/{project_id_or_key}`. At least one option is required.
    pub async fn update(
        &self,
        project_id_or_key: &str,
        options: &[ProjectOption],
    ) -> Result<Project, BacklogError> {
        require_options(options)?;
        let mut params = RequestParams::new();
        apply_options(&mut params, options)?;

        self.methods
            .patch(&format!("projects/{project_id_or_key}"), params)
            .await?
            .json()
    }

    /// `DELETE projects/{project_id_or_key}`
    pub async fn delete(&self, project_id_or_key: &str) -> Result<Project, BacklogError> {
        self.methods
            .delete(&format!("projects/{project_id_or_key}"), RequestParams::new())
            .await?
            .json()
    }
}
