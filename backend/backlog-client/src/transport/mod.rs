//! HTTP transport: URL assembly, body encoding, dispatch, status checking.

pub mod response;

pub use response::{ApiResponse, check_response};

use crate::error::BacklogError;
use crate::params::RequestParams;
use crate::{API_PATH_PREFIX, DEFAULT_USER_AGENT};

use common::{HttpStatusCode, RedactedApiKey};

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

const API_KEY_PARAM: &str = "apiKey";
const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const UPLOAD_FIELD_NAME: &str = "file";
const UPLOAD_PART_MIME: &str = "application/octet-stream";

/// The five verbs every resource service is built on.
///
/// Services only see this trait, so they can be driven by [`Transport`] in
/// production and by a recording fake in tests.
pub trait RequestMethods: Send + Sync {
    /// `params` and `apiKey` go in the query string; no body.
    fn get(
        &self,
        path: &str,
        params: RequestParams,
    ) -> impl Future<Output = Result<ApiResponse, BacklogError>> + Send;

    /// `params` go in a form body; only `apiKey` is in the query string.
    fn post(
        &self,
        path: &str,
        params: RequestParams,
    ) -> impl Future<Output = Result<ApiResponse, BacklogError>> + Send;

    fn patch(
        &self,
        path: &str,
        params: RequestParams,
    ) -> impl Future<Output = Result<ApiResponse, BacklogError>> + Send;

    fn delete(
        &self,
        path: &str,
        params: RequestParams,
    ) -> impl Future<Output = Result<ApiResponse, BacklogError>> + Send;

    /// POSTs the file at `file_path` as the single multipart field `file`,
    /// named `file_name`.
    fn upload(
        &self,
        path: &str,
        file_path: &Path,
        file_name: &str,
    ) -> impl Future<Output = Result<ApiResponse, BacklogError>> + Send;
}

/// `reqwest`-backed [`RequestMethods`] bound to one Backlog space.
///
/// Immutable after construction. Clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: Url,
    api_key: RedactedApiKey,
    http: HttpClient,
}

impl Transport {
    pub fn new(base_url: &str, api_key: impl Into<RedactedApiKey>) -> Result<Self, BacklogError> {
        Self::with_settings(base_url, api_key, DEFAULT_TIMEOUT_DURATION, DEFAULT_USER_AGENT)
    }

    /// Same as [`Transport::new`] with an explicit per-request timeout and
    /// `User-Agent`.
    pub fn with_settings(
        base_url: &str,
        api_key: impl Into<RedactedApiKey>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, BacklogError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(BacklogError::missing_token());
        }

        let base_url = parse_base_url(base_url)?;
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        debug!(
            "Backlog transport ready for {} (key {} chars, timeout {:?})",
            base_url,
            api_key.len(),
            timeout
        );

        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/v2/{path}?{query}` with `apiKey` set exactly once.
    ///
    /// Segments are joined with single separators; empty and `.` segments are
    /// dropped and `..` removes the previous segment.
    #[track_caller]
    pub fn endpoint_url(&self, path: &str, mut query: RequestParams) -> Result<Url, BacklogError> {
        if path.is_empty() {
            return Err(BacklogError::empty_path());
        }

        let mut segments: Vec<&str> = Vec::new();
        let base_path = self.base_url.path();
        for segment in base_path
            .split('/')
            .chain(API_PATH_PREFIX.split('/'))
            .chain(path.split('/'))
        {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(segment),
            }
        }

        query.set(API_KEY_PARAM, self.api_key.as_str());

        let mut url = self.base_url.clone();
        url.set_path(&format!("/{}", segments.join("/")));
        url.set_query(Some(&query.encode()));
        url.set_fragment(None);
        Ok(url)
    }

    async fn send_form(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<ApiResponse, BacklogError> {
        let url = self.endpoint_url(path, RequestParams::new())?;
        debug!("{method} {} ({} form keys)", url.path(), params.len());

        let request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(params.encode());
        self.dispatch(request).await
    }

    /// Sends `request`, reads the whole body, and checks the status.
    async fn dispatch(&self, request: RequestBuilder) -> Result<ApiResponse, BacklogError> {
        let response = request.header(ACCEPT, JSON_CONTENT_TYPE).send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let body = response.bytes().await?;
        debug!("Backlog answered HTTP {status} ({} bytes)", body.len());
        check_response(status, body.to_vec())
    }
}

impl RequestMethods for Transport {
    async fn get(&self, path: &str, params: RequestParams) -> Result<ApiResponse, BacklogError> {
        let url = self.endpoint_url(path, params)?;
        debug!("GET {}", url.path());
        self.dispatch(self.http.get(url)).await
    }

    async fn post(&self, path: &str, params: RequestParams) -> Result<ApiResponse, BacklogError> {
        self.send_form(Method::POST, path, params).await
    }

    async fn patch(&self, path: &str, params: RequestParams) -> Result<ApiResponse, BacklogError> {
        self.send_form(Method::PATCH, path, params).await
    }

    async fn delete(&self, path: &str, params: RequestParams) -> Result<ApiResponse, BacklogError> {
        self.send_form(Method::DELETE, path, params).await
    }

    async fn upload(
        &self,
        path: &str,
        file_path: &Path,
        file_name: &str,
    ) -> Result<ApiResponse, BacklogError> {
        if file_path.as_os_str().is_empty() || file_name.is_empty() {
            return Err(BacklogError::missing_file_arg());
        }
        let url = self.endpoint_url(path, RequestParams::new())?;

        // The file is read whole and closed before the request is sent.
        let contents = tokio::fs::read(file_path)
            .await
            .map_err(|e| BacklogError::file_read(file_path, e))?;
        debug!("POST {} (upload {}, {} bytes)", url.path(), file_name, contents.len());

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(UPLOAD_PART_MIME)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        self.dispatch(self.http.post(url).multipart(form)).await
    }
}

#[track_caller]
fn parse_base_url(base_url: &str) -> Result<Url, BacklogError> {
    let url = Url::parse(base_url)?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        scheme => Err(BacklogError::invalid_base_url(format!(
            "expected an absolute http(s) URL, got scheme '{scheme}' in {base_url}"
        ))),
    }
}
