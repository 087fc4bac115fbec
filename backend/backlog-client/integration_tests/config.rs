use crate::helpers::query_values;

use backlog_client::config::{BASE_URL_ENV, CONFIG_FILE_NAME, TIMEOUT_SECS_ENV};
use backlog_client::error::ConfigError;
use backlog_client::{BacklogError, Client, ClientConfig};

use std::env;
use std::time::Duration;

use serde_json::json;
use serial_test::serial;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY_ENV: &str = "BACKLOG_CLIENT_TEST_API_KEY";

fn write_config(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), contents)
        .expect("Failed to write config file");
    dir
}

fn set_env(name: &str, value: &str) {
    // SAFETY: every test touching the environment runs under #[serial].
    unsafe { env::set_var(name, value) };
}

fn clear_env(name: &str) {
    // SAFETY: see set_env.
    unsafe { env::remove_var(name) };
}

/// **VALUE**: Verifies a minimal `backlog.toml` fills in every default.
///
/// **WHY THIS MATTERS**: Most deployments only set the space URL.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` turning an
/// optional field into a parse error.
#[test]
fn given_minimal_toml_when_loaded_then_defaults_apply() {
    // GIVEN: A config file with only base_url
    let dir = write_config(r#"base_url = "https://example.backlog.com/""#);

    // WHEN: Loading it
    let config = ClientConfig::load(dir.path()).unwrap();

    // THEN: Defaults for the rest
    assert_eq!(config.base_url, "https://example.backlog.com/");
    assert_eq!(config.api_key_env, "BACKLOG_API_KEY");
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert!(config.user_agent().starts_with("backlog-client/"));
}

#[test]
fn given_full_toml_when_loaded_then_every_field_is_read() {
    let dir = write_config(
        r#"
base_url = "https://example.backlog.jp"
api_key_env = "MY_KEY"
timeout_secs = 5
user_agent = "reporting-job/2.0"
"#,
    );

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config.api_key_env, "MY_KEY");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.user_agent(), "reporting-job/2.0");
}

#[test]
fn given_missing_file_when_loaded_then_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = ClientConfig::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn given_invalid_toml_when_loaded_then_parse_error_names_file() {
    let dir = write_config("base_url = ");

    let err = ClientConfig::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

/// **VALUE**: Verifies out-of-range values are rejected at load time.
///
/// **BUG THIS CATCHES**: Would catch a zero timeout reaching reqwest, where
/// every request would fail immediately.
#[test]
fn given_bad_values_when_loaded_then_validation_error() {
    let zero_timeout = write_config(
        r#"
base_url = "https://example.backlog.com"
timeout_secs = 0
"#,
    );
    let no_scheme = write_config(r#"base_url = "example.backlog.com""#);

    assert!(matches!(
        ClientConfig::load(zero_timeout.path()),
        Err(ConfigError::ValidationError { .. })
    ));
    assert!(matches!(
        ClientConfig::load(no_scheme.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
#[serial]
fn given_env_vars_when_building_from_env_then_config_uses_them() {
    set_env(BASE_URL_ENV, "https://env.backlog.com");
    set_env(TIMEOUT_SECS_ENV, "12");

    let config = ClientConfig::from_env();

    clear_env(BASE_URL_ENV);
    clear_env(TIMEOUT_SECS_ENV);

    let config = config.unwrap();
    assert_eq!(config.base_url, "https://env.backlog.com");
    assert_eq!(config.timeout_secs, 12);
}

#[test]
#[serial]
fn given_no_base_url_env_when_building_from_env_then_missing_env() {
    clear_env(BASE_URL_ENV);

    let err = ClientConfig::from_env().unwrap_err();

    match err {
        ConfigError::MissingEnv { name, .. } => assert_eq!(name, BASE_URL_ENV),
        other => panic!("expected MissingEnv, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_non_numeric_timeout_env_when_building_from_env_then_validation_error() {
    set_env(BASE_URL_ENV, "https://env.backlog.com");
    set_env(TIMEOUT_SECS_ENV, "soon");

    let result = ClientConfig::from_env();

    clear_env(BASE_URL_ENV);
    clear_env(TIMEOUT_SECS_ENV);

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// **VALUE**: Verifies the resolved key never shows up in debug output.
///
/// **WHY THIS MATTERS**: Configs and clients get logged; an API key in a log
/// grants full access to the space.
#[test]
#[serial]
fn given_key_in_env_when_resolved_then_value_is_redacted_in_debug() {
    set_env(TEST_KEY_ENV, "  secret-key-123  ");
    let mut config = ClientConfig::new("https://example.backlog.com");
    config.api_key_env = TEST_KEY_ENV.to_string();

    let key = config.resolve_api_key();

    clear_env(TEST_KEY_ENV);

    let key = key.unwrap();
    assert_eq!(key.as_str(), "secret-key-123");
    assert!(!format!("{key:?}").contains("secret-key-123"));
}

#[test]
#[serial]
fn given_blank_key_env_when_resolved_then_missing_env() {
    set_env(TEST_KEY_ENV, "   ");
    let mut config = ClientConfig::new("https://example.backlog.com");
    config.api_key_env = TEST_KEY_ENV.to_string();

    let result = config.resolve_api_key();

    clear_env(TEST_KEY_ENV);

    assert!(matches!(result, Err(ConfigError::MissingEnv { .. })));
}

/// **VALUE**: Verifies a client built from config sends the key it resolved.
///
/// **BUG THIS CATCHES**: Would catch `from_config` reading the wrong variable
/// or dropping the configured user agent.
#[tokio::test]
#[serial]
async fn given_config_when_client_built_then_requests_carry_env_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/myself"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Me"})))
        .expect(1)
        .mount(&server)
        .await;

    set_env(TEST_KEY_ENV, "from-env");
    let mut config = ClientConfig::new(server.uri());
    config.api_key_env = TEST_KEY_ENV.to_string();
    config.user_agent = Some("config-test".to_string());

    let client = Client::from_config(&config);
    clear_env(TEST_KEY_ENV);
    let client = client.unwrap();

    client.user.myself().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(query_values(&requests[0], "apiKey"), vec!["from-env"]);
    assert_eq!(
        requests[0].headers.get("user-agent").unwrap(),
        "config-test"
    );
}

#[test]
#[serial]
fn given_unset_key_env_when_client_built_then_config_error() {
    clear_env(TEST_KEY_ENV);
    let mut config = ClientConfig::new("https://example.backlog.com");
    config.api_key_env = TEST_KEY_ENV.to_string();

    let err = Client::from_config(&config).unwrap_err();

    assert!(matches!(err, BacklogError::Config(_)));
    assert_eq!(err.error_category(), "configuration");
}
