//! Attachment endpoints of wikis, issues, and pull requests.

use crate::error::BacklogError;
use crate::params::RequestParams;
use crate::services::upload_to_space;
use crate::transport::{RequestMethods, Transport};

use models::Attachment;

use std::path::Path;
use std::sync::Arc;

const ATTACHMENT_ID_PARAM: &str = "attachmentId[]";

async fn list<M: RequestMethods>(methods: &M, path: &str) -> Result<Vec<Attachment>, BacklogError> {
    methods.get(path, RequestParams::new()).await?.json()
}

async fn remove<M: RequestMethods>(methods: &M, path: &str) -> Result<Attachment, BacklogError> {
    methods.delete(path, RequestParams::new()).await?.json()
}

/// Files bound to wiki pages.
#[derive(Debug, Clone)]
pub struct WikiAttachmentService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> WikiAttachmentService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// Uploads a file to the space, ready to be bound with [`attach`](Self::attach).
    pub async fn upload(
        &self,
        file_path: impl AsRef<Path>,
        file_name: &str,
    ) -> Result<Attachment, BacklogError> {
        upload_to_space(self.methods.as_ref(), file_path.as_ref(), file_name).await
    }

    /// Binds files already uploaded to the space (see
    /// [`SpaceService::upload_attachment`](crate::services::SpaceService::upload_attachment))
    /// to the wiki page.
    ///
    /// `POST wikis/{wiki_id}/attachments` with repeated `attachmentId[]`.
    pub async fn attach(
        &self,
        wiki_id: i64,
        attachment_ids: &[i64],
    ) -> Result<Vec<Attachment>, BacklogError> {
        if attachment_ids.is_empty() {
            return Err(BacklogError::invalid_option(
                "attach requires one or more attachment ids",
            ));
        }

        let mut params = RequestParams::new();
        for id in attachment_ids {
            params.add(ATTACHMENT_ID_PARAM, id.to_string());
        }

        self.methods
            .post(&format!("wikis/{wiki_id}/attachments"), params)
            .await?
            .json()
    }

    /// `GET wikis/{wiki_id}/attachments`
    pub async fn list(&self, wiki_id: i64) -> Result<Vec<Attachment>, BacklogError> {
        list(self.methods.as_ref(), &format!("wikis/{wiki_id}/attachments")).await
    }

    /// `DELETE wikis/{wiki_id}/attachments/{attachment_id}`
    pub async fn remove(&self, wiki_id: i64, attachment_id: i64) -> Result<Attachment, BacklogError> {
        remove(
            self.methods.as_ref(),
            &format!("wikis/{wiki_id}/attachments/{attachment_id}"),
        )
        .await
    }
}

/// Files attached to issues.
#[derive(Debug, Clone)]
pub struct IssueAttachmentService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> IssueAttachmentService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// Uploads a file to the space, ready to be bound with the issue update endpoint.
    pub async fn upload(
        &self,
        file_path: impl AsRef<Path>,
        file_name: &str,
    ) -> Result<Attachment, BacklogError> {
        upload_to_space(self.methods.as_ref(), file_path.as_ref(), file_name).await
    }

    /// `GET issues/{issue_id_or_key}/attachments`
    pub async fn list(&self, issue_id_or_key: &str) -> Result<Vec<Attachment>, BacklogError> {
        list(
            self.methods.as_ref(),
            &format!("issues/{issue_id_or_key}/attachments"),
        )
        .await
    }

    /// `DELETE issues/{issue_id_or_key}/attachments/{attachment_id}`
    pub async fn remove(
        &self,
        issue_id_or_key: &str,
        attachment_id: i64,
    ) -> Result<Attachment, BacklogError> {
        remove(
            self.methods.as_ref(),
            &format!("issues/{issue_id_or_key}/attachments/{attachment_id}"),
        )
        .await
    }
}

/// Files attached to pull requests.
#[derive(Debug, Clone)]
pub struct PullRequestAttachmentService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> PullRequestAttachmentService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// Uploads a file to the space, ready to be bound with the pull request update endpoint.
    pub async fn upload(
        &self,
        file_path: impl AsRef<Path>,
        file_name: &str,
    ) -> Result<Attachment, BacklogError> {
        upload_to_space(self.methods.as_ref(), file_path.as_ref(), file_name).await
    }

    /// `GET projects/{project}/git/repositories/{repo}/pullRequests/{number}/attachments`
    pub async fn list(
        &self,
        project_id_or_key: &str,
        repo_id_or_name: &str,
        pr_number: i64,
    ) -> Result<Vec<Attachment>, BacklogError> {
        let path = pull_request_attachments_path(project_id_or_key, repo_id_or_name, pr_number);
        list(self.methods.as_ref(), &path).await
    }

    /// `DELETE projects/{project}/git/repositories/{repo}/pullRequests/{number}/attachments/{attachment_id}`
    pub async fn remove(
        &self,
        project_id_or_key: &str,
        repo_id_or_name: &str,
        pr_number: i64,
        attachment_id: i64,
    ) -> Result<Attachment, BacklogError> {
        let path = pull_request_attachments_path(project_id_or_key, repo_id_or_name, pr_number);
        remove(self.methods.as_ref(), &format!("{path}/{attachment_id}")).await
    }
}

fn pull_request_attachments_path(
    project_id_or_key: &str,
    repo_id_or_name: &str,
    pr_number: i64,
) -> String {
    format!(
        "projects/{project_id_or_key}/git/repositories/{repo_id_or_name}/pullRequests/{pr_number}/attachments"
    )
}
