use crate::config::ClientConfig;
use crate::error::BacklogError;
use crate::services::{
    ActivityService, IssueService, ProjectService, PullRequestService, SpaceService, UserService,
    WikiService,
};
use crate::transport::Transport;

use common::RedactedApiKey;

use std::sync::Arc;

use log::info;

/// Backlog API client for one space.
///
/// Built once and read-only afterwards. Cloning is cheap and every clone
/// shares the same connection pool, so a single client can serve concurrent
/// tasks.
///
/// ```no_run
/// # async fn run() -> Result<(), backlog_client::BacklogError> {
/// use backlog_client::{ActivityOption, Client, ORDER_DESC};
///
/// let client = Client::new("https://example.backlog.com/", "api-key")?;
/// let attachment = client.space.upload_attachment("/tmp/a.png", "a.png").await?;
/// client.wiki.attachment.attach(42, &[attachment.id]).await?;
///
/// let recent = client
///     .activity
///     .space(&[ActivityOption::count(20), ActivityOption::order(ORDER_DESC)])
///     .await?;
/// # let _ = recent;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,

    pub activity: ActivityService,
    pub issue: IssueService,
    pub project: ProjectService,
    pub pull_request: PullRequestService,
    pub space: SpaceService,
    pub user: UserService,
    pub wiki: WikiService,
}

impl Client {
    /// # Errors
    ///
    /// [`BacklogError::MissingToken`] for an empty key,
    /// [`BacklogError::InvalidBaseUrl`] when `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str, api_key: impl Into<RedactedApiKey>) -> Result<Self, BacklogError> {
        Ok(Self::with_transport(Transport::new(base_url, api_key)?))
    }

    /// Builds a client from a validated [`ClientConfig`], reading the API key
    /// from the environment variable it names.
    pub fn from_config(config: &ClientConfig) -> Result<Self, BacklogError> {
        config.validate()?;
        let api_key = config.resolve_api_key()?;
        let transport = Transport::with_settings(
            &config.base_url,
            api_key,
            config.timeout(),
            config.user_agent(),
        )?;

        info!("Backlog client configured for {}", transport.base_url());
        Ok(Self::with_transport(transport))
    }

    pub fn with_transport(transport: Transport) -> Self {
        let transport = Arc::new(transport);

        Self {
            activity: ActivityService::new(Arc::clone(&transport)),
            issue: IssueService::new(Arc::clone(&transport)),
            project: ProjectService::new(Arc::clone(&transport)),
            pull_request: PullRequestService::new(Arc::clone(&transport)),
            space: SpaceService::new(Arc::clone(&transport)),
            user: UserService::new(Arc::clone(&transport)),
            wiki: WikiService::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Raw verbs, for endpoints without a service method.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
