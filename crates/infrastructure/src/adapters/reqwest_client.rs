//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every status code is returned as a response; only failures to obtain one
//! become errors.

use std::collections::BTreeMap;

use apiconsole_application::ports::{
    HttpClient, HttpClientError, OutboundRequest, TransportResponse,
};
use apiconsole_domain::{HttpMethod, StatusCode};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};
use tracing::debug;

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// No request timeout is configured; transport defaults apply.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: as given
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(user_agent: &str) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to port `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        let host = || {
            error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::Dns {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(error_chain(error))
    }

    /// Flattens response headers: lowercase names, repeated values joined
    /// with `", "`.
    fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
        let mut collected: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            let value = value
                .to_str()
                .map_or_else(|_| String::from_utf8_lossy(value.as_bytes()).into_owned(), str::to_string);
            collected
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }
        collected
    }
}

/// Joins an error with its sources, since reqwest's top-level message
/// rarely says what actually failed.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, HttpClientError> {
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            let bytes =
                serde_json::to_vec(body).map_err(|e| HttpClientError::InvalidBody(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or_else(|| StatusCode::new(status.as_u16()).reason_phrase())
            .to_string();
        let headers = Self::collect_headers(response.headers());

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::BodyRead(error_chain(&e)))?
            .to_vec();

        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}
