//! Simple `HttpRequest` for testing and basic use cases.
//!
//! This is a lightweight request representation for callers that do not
//! already hold an `http::Request`.

use std::collections::HashMap;

/// Simple HTTP request: method, request target, headers, body.
///
/// The target is an origin-form request target (`/path?query`), as sent on
/// the request line. Absolute-form targets (`https://host/path`) are not
/// split into authority and path; use the `http::Request` adapter for those.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    method: String,
    target: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl HttpRequest {
    /// Create a builder for `HttpRequest`.
    #[must_use]
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    /// Get the HTTP method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Get the raw request target (path with query string).
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Get the request body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Builder for `HttpRequest`.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self {
            request: HttpRequest {
                method: "GET".to_string(),
                ..HttpRequest::default()
            },
        }
    }
}

impl HttpRequestBuilder {
    /// Set the HTTP method (default `GET`).
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.request.method = method.into();
        self
    }

    /// Set the request target (path with optional query string).
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.request.target = target.into();
        self
    }

    /// Add a header (name is lowercased for case-insensitive lookup).
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .headers
            .insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.request.body = body.into();
        self
    }

    /// Build the `HttpRequest`.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        self.request
    }
}
