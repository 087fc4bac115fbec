//! Backlog API key wrapper that never leaks through logs.

use crate::{ErrorLocation, SecretError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// The `apiKey` credential of a Backlog space.
///
/// `Debug` and `Display` print a placeholder, the buffer is zeroized on drop,
/// and serialization is refused. The raw value is only reachable through
/// [`RedactedApiKey::as_str`], which the transport calls when it writes the
/// `apiKey` query parameter.
#[derive(Clone)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// Raw key for the outgoing query string. Do not log the result.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True when the key holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl From<&str> for RedactedApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for RedactedApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl serde::Serialize for RedactedApiKey {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(SecretError::Serialization {
            secret: "Backlog API key",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
