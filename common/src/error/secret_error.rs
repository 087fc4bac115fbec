use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Refusals raised by secret wrappers such as [`RedactedApiKey`](crate::RedactedApiKey).
#[derive(Debug, ThisError)]
pub enum SecretError {
    #[error("Secret Serialization Error: {secret} cannot be serialized, call as_str() explicitly {location}")]
    Serialization {
        secret: &'static str,
        location: ErrorLocation,
    },
}
