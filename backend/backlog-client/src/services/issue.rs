use crate::services::attachment::IssueAttachmentService;
use crate::transport::{RequestMethods, Transport};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct IssueService<M = Transport> {
    pub attachment: IssueAttachmentService<M>,
}

impl<M: RequestMethods> IssueService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self {
            attachment: IssueAttachmentService::new(methods),
        }
    }
}
