pub mod api;
pub mod backlog;
pub mod config;

pub use api::{ApiErrorEntry, ApiResponseError};
pub use backlog::BacklogError;
pub use config::ConfigError;
