//! The error envelope Backlog returns with non-2xx responses.
//!
//! ```json
//! {"errors":[{"message":"No such project.","code":6,"moreInfo":""}]}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorEntry {
    pub message: String,
    pub code: i64,
    #[serde(default)]
    pub more_info: String,
}

impl fmt::Display for ApiErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.more_info.is_empty() {
            write!(f, " {}", self.more_info)?;
        }
        Ok(())
    }
}

/// Decoded error body. Every entry the server sent is kept, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponseError {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

impl ApiResponseError {
    pub fn codes(&self) -> Vec<i64> {
        self.errors.iter().map(|entry| entry.code).collect()
    }
}

impl fmt::Display for ApiResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no error details");
        }
        for (index, entry) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiResponseError {}
