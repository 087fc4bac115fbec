use crate::services::attachment::PullRequestAttachmentService;
use crate::transport::{RequestMethods, Transport};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PullRequestService<M = Transport> {
    pub attachment: PullRequestAttachmentService<M>,
}

impl<M: RequestMethods> PullRequestService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self {
            attachment: PullRequestAttachmentService::new(methods),
        }
    }
}
