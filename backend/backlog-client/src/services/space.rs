use crate::error::BacklogError;
use crate::services::upload_to_space;
use crate::transport::{RequestMethods, Transport};

use models::Attachment;

use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SpaceService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> SpaceService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// Uploads a file to the space. The returned id is what
    /// [`WikiAttachmentService::attach`](crate::services::WikiAttachmentService::attach)
    /// and the issue/pull request endpoints take.
    ///
    /// Neither `file_path` nor `file_name` may be empty.
    pub async fn upload_attachment(
        &self,
        file_path: impl AsRef<Path>,
        file_name: &str,
    ) -> Result<Attachment, BacklogError> {
        upload_to_space(self.methods.as_ref(), file_path.as_ref(), file_name).await
    }
}
