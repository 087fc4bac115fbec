// Unit tests for BacklogError formatting and classification

use crate::error::{ApiErrorEntry, ApiResponseError, BacklogError, ConfigError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies errors report the line that raised them.
///
/// **WHY THIS MATTERS**: All constructors are `#[track_caller]`; without that
/// every invalid option would point into `backlog.rs`.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being removed from a
/// constructor.
#[test]
fn given_constructor_when_called_then_location_is_call_site() {
    let err = BacklogError::empty_path();

    let text = err.to_string();

    assert!(text.starts_with("Empty Path Error"));
    assert!(text.contains("tests/error.rs"), "location should be this file: {text}");
}

#[test]
fn given_api_error_when_formatted_then_includes_status_message_and_code() {
    let errors = ApiResponseError {
        errors: vec![ApiErrorEntry {
            message: "no permission".to_string(),
            code: 11,
            more_info: String::new(),
        }],
    };

    let err = BacklogError::api(HttpStatusCode(403), errors);

    let text = err.to_string();
    assert!(text.contains("HTTP 403"));
    assert!(text.contains("no permission (code: 11)"));
    assert_eq!(err.error_category(), "api");
}

#[test]
fn given_error_kinds_when_categorized_then_each_maps_to_its_group() {
    let config = BacklogError::from(ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "bad".to_string(),
    });

    assert_eq!(config.error_category(), "configuration");
    assert_eq!(BacklogError::missing_file_arg().error_category(), "argument");
    assert_eq!(BacklogError::invalid_option("x").error_category(), "argument");
    assert_eq!(BacklogError::invalid_base_url("x").error_category(), "configuration");
    assert!(config.status_code().is_none());
    assert!(config.api_errors().is_none());
}

#[test]
fn given_empty_envelope_when_formatted_then_says_no_details() {
    let errors: ApiResponseError = serde_json::from_str("{}").unwrap();

    assert!(errors.errors.is_empty());
    assert_eq!(errors.to_string(), "no error details");
}
