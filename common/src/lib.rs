//! Cross-cutting primitives shared by the Backlog client crates.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, status codes, secret handling
//! - **models**: Backlog resource DTOs
//! - **backlog-client**: transport, options, and resource services
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::secret_error::SecretError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
