use crate::error::{ApiResponseError, BacklogError};

use common::HttpStatusCode;

use log::warn;
use serde::de::DeserializeOwned;

/// A fully read 2xx response.
///
/// The connection has already been released by the time a caller holds one;
/// only the status and body bytes remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: HttpStatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: HttpStatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> HttpStatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body into `T`.
    #[track_caller]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BacklogError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Turns a status and body into either an [`ApiResponse`] or the error the
/// server described.
///
/// - 2xx: the body is handed back untouched.
/// - empty body: [`BacklogError::EmptyBody`].
/// - otherwise the body must be the `{"errors":[...]}` envelope; a body that
///   is not yields [`BacklogError::Json`].
#[track_caller]
pub fn check_response(status: HttpStatusCode, body: Vec<u8>) -> Result<ApiResponse, BacklogError> {
    if status.is_success() {
        return Ok(ApiResponse { status, body });
    }

    warn!("Backlog responded with HTTP {status} ({} byte body)", body.len());

    if body.is_empty() {
        return Err(BacklogError::empty_body(status));
    }

    let errors: ApiResponseError = serde_json::from_slice(&body)?;
    Err(BacklogError::api(status, errors))
}
