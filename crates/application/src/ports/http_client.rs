//! HTTP Client port

use std::collections::BTreeMap;
use std::future::Future;

use apiconsole_domain::HttpMethod;
use serde_json::Value;
use thiserror::Error;

/// A fully prepared request, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, proxy base included.
    pub url: String,
    /// Headers in the order they are applied.
    pub headers: Vec<(String, String)>,
    /// JSON payload, present only for body-bearing methods.
    pub body: Option<Value>,
}

impl OutboundRequest {
    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from upstream, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase.
    pub status_text: String,
    /// Response headers with lowercase names.
    pub headers: BTreeMap<String, String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Errors that prevent an upstream response from being received.
///
/// The display text of each variant is used verbatim as the `error`
/// message of a network-error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The composed URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Host name resolution failed.
    #[error("Could not resolve host {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Underlying message.
        message: String,
    },

    /// The upstream refused the connection.
    #[error("Connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was reached.
    #[error("Too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured limit.
        max: usize,
    },

    /// The request body is not valid JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// Implementations issue exactly one request per call and never retry.
/// Every HTTP status, including 4xx and 5xx, is a successful outcome;
/// only failures to obtain a response are errors.
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the raw upstream response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<TransportResponse, HttpClientError>> + Send;
}
