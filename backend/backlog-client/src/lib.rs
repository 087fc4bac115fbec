//! Client library for the Backlog REST API (`/api/v2`).
//!
//! # Layers
//! - [`RequestParams`]: ordered form/query parameters
//! - [`options`]: validated, per-resource parameter options
//! - [`Transport`]: the five verbs (`get`, `post`, `patch`, `delete`, `upload`)
//!   behind the [`RequestMethods`] trait
//! - [`services`]: one façade per resource, generic over [`RequestMethods`]
//! - [`Client`]: owns a [`Transport`] and one instance of each service
//!
//! GET sends its parameters in the query string; POST, PATCH and DELETE send
//! them as a form body. Only `apiKey` is ever in the query for the latter.

pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod params;
pub mod services;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ApiErrorEntry, ApiResponseError, BacklogError};
pub use options::{
    ActivityOption, ApplyOption, FORMAT_BACKLOG, FORMAT_MARKDOWN, ORDER_ASC, ORDER_DESC,
    ProjectOption, WikiOption,
};
pub use params::RequestParams;
pub use transport::{ApiResponse, RequestMethods, Transport};

pub use models;

pub const API_VERSION: &str = "v2";
pub const API_PATH_PREFIX: &str = const_format::concatcp!("api/", API_VERSION);
pub const DEFAULT_USER_AGENT: &str =
    const_format::concatcp!("backlog-client/", env!("CARGO_PKG_VERSION"));
