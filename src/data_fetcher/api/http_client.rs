//! HTTP client creation and configuration utilities

use crate::constants::identity;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER};
use std::time::Duration;

/// Headers that make requests look like they come from the SofaScore web app.
/// The upstream rejects unidentified automated clients.
pub fn identity_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(identity::ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(identity::ACCEPT_LANGUAGE),
    );
    headers.insert(REFERER, HeaderValue::from_static(identity::REFERER));
    headers.insert(ORIGIN, HeaderValue::from_static(identity::ORIGIN));
    headers
}

/// Creates the HTTP client shared by every endpoint caller.
///
/// * Browser user agent plus `identity_headers` on every request
/// * Default timeout for requests; channel lookups override it per request
/// * Connection pooling so the many small lookups reuse connections
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(identity::USER_AGENT)
        .default_headers(identity_headers())
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
