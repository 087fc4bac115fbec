use crate::error::BacklogError;
use crate::options::{ActivityOption, apply_options};
use crate::params::RequestParams;
use crate::transport::{RequestMethods, Transport};

use models::Activity;

use std::sync::Arc;

/// Activity feeds of the space, a user, or a project.
#[derive(Debug, Clone)]
pub struct ActivityService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> ActivityService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// `GET space/activities`
    pub async fn space(&self, options: &[ActivityOption]) -> Result<Vec<Activity>, BacklogError> {
        self.list("space/activities".to_string(), options).await
    }

    /// `GET users/{user_id}/activities`
    pub async fn user(
        &self,
        user_id: i64,
        options: &[ActivityOption],
    ) -> Result<Vec<Activity>, BacklogError> {
        self.list(format!("users/{user_id}/activities"), options).await
    }

    /// `GET projects/{project_id_or_key}/activities`
    pub async fn project(
        &self,
        project_id_or_key: &str,
        options: &[ActivityOption],
    ) -> Result<Vec<Activity>, BacklogError> {
        self.list(format!("projects/{project_id_or_key}/activities"), options)
            .await
    }

    async fn list(
        &self,
        path: String,
        options: &[ActivityOption],
    ) -> Result<Vec<Activity>, BacklogError> {
        let mut params = RequestParams::new();
        apply_options(&mut params, options)?;

        self.methods.get(&path, params).await?.json()
    }
}
