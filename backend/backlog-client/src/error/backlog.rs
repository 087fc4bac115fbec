//! The error returned by every verb and service method.
//!
//! Variants fall into five groups:
//! - configuration: `MissingToken`, `InvalidBaseUrl`, `Config`
//! - arguments: `EmptyPath`, `MissingFileArg`, `InvalidOption`, `FileRead`
//! - transport: `Http` (the `reqwest::Error` is kept as the source)
//! - API: `Api`, `EmptyBody`
//! - decoding: `Json`
//!
//! Every variant records where it was raised via `#[track_caller]`.

use crate::error::api::ApiResponseError;
use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BacklogError {
    #[error("Missing Token Error: API key must not be empty {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid Base URL Error: {message} {location}")]
    InvalidBaseUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Empty Path Error: request path must not be empty {location}")]
    EmptyPath { location: ErrorLocation },

    #[error("Missing File Argument Error: file's path and name are required {location}")]
    MissingFileArg { location: ErrorLocation },

    #[error("Invalid Option Error: {message} {location}")]
    InvalidOption {
        message: String,
        location: ErrorLocation,
    },

    #[error("File Read Error: {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP Error: {source} {location}")]
    Http {
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API Error: HTTP {status} - {errors} {location}")]
    Api {
        status: HttpStatusCode,
        errors: ApiResponseError,
        location: ErrorLocation,
    },

    #[error("Empty Body Error: response body is empty (HTTP {status}) {location}")]
    EmptyBody {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BacklogError {
    #[track_caller]
    pub fn missing_token() -> Self {
        BacklogError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_base_url(message: impl Into<String>) -> Self {
        BacklogError::InvalidBaseUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_path() -> Self {
        BacklogError::EmptyPath {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_file_arg() -> Self {
        BacklogError::MissingFileArg {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_option(message: impl Into<String>) -> Self {
        BacklogError::InvalidOption {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        BacklogError::FileRead {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn api(status: HttpStatusCode, errors: ApiResponseError) -> Self {
        BacklogError::Api {
            status,
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_body(status: HttpStatusCode) -> Self {
        BacklogError::EmptyBody {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of the failed response, for `Api` and `EmptyBody`.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BacklogError::Api { status, .. } | BacklogError::EmptyBody { status, .. } => {
                Some(status.0)
            }
            BacklogError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The structured `errors[]` list, when the server sent one.
    pub fn api_errors(&self) -> Option<&ApiResponseError> {
        match self {
            BacklogError::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Coarse category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            BacklogError::MissingToken { .. }
            | BacklogError::InvalidBaseUrl { .. }
            | BacklogError::Config(_) => "configuration",
            BacklogError::EmptyPath { .. }
            | BacklogError::MissingFileArg { .. }
            | BacklogError::InvalidOption { .. }
            | BacklogError::FileRead { .. } => "argument",
            BacklogError::Http { .. } => "transport",
            BacklogError::Api { .. } | BacklogError::EmptyBody { .. } => "api",
            BacklogError::Json { .. } => "decode",
        }
    }
}

impl From<url::ParseError> for BacklogError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        BacklogError::InvalidBaseUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for BacklogError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        BacklogError::Http {
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}

impl From<serde_json::Error> for BacklogError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        BacklogError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
