//! Shared setup for integration tests against a wiremock Backlog server.

use backlog_client::Client;

use wiremock::{MockServer, Request};

/// API key every test client is configured with.
pub const TEST_API_KEY: &str = "T";

/// Client pointed at the mock server's root.
pub fn client_for(server: &MockServer) -> Client {
    Client::new(&server.uri(), TEST_API_KEY).expect("Failed to build client for mock server")
}

/// The single request the server received.
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("Request recording should be enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .headers
        .get(name)
        .map(|value| value.to_str().expect("Header should be ASCII"))
}

/// All values of `name` in the request's query string.
pub fn query_values(request: &Request, name: &str) -> Vec<String> {
    request
        .url
        .query_pairs()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .collect()
}
