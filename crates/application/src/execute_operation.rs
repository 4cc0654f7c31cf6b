//! Execute Operation Use Case
//!
//! Turns an operation plus its bound request into exactly one upstream call
//! and normalizes whatever happens into a [`Response`]. Nothing escapes:
//! malformed body text, transport failures and upstream error statuses all
//! come back as a `Response`.

use std::sync::Arc;
use std::time::Instant;

use apiconsole_domain::{BoundRequest, Operation, Response, request::compose_url};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::ports::{HttpClient, HttpClientError, OutboundRequest, TransportResponse};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Use case for executing catalog operations.
///
/// All requests target `proxy_base`; the hosting environment rewrites it to
/// the real upstream.
///
/// # Example
///
/// ```ignore
/// let client = ReqwestHttpClient::new(&settings)?;
/// let use_case = ExecuteOperation::new(Arc::new(client), "http://localhost:3000/proxy");
///
/// let request = RequestDraft::for_operation(&operation).bind(&operation);
/// let response = use_case.execute(&operation, &request).await;
/// ```
pub struct ExecuteOperation<C: HttpClient> {
    client: Arc<C>,
    proxy_base: String,
}

impl<C: HttpClient> ExecuteOperation<C> {
    /// Creates a new `ExecuteOperation` use case.
    pub fn new(client: Arc<C>, proxy_base: impl Into<String>) -> Self {
        Self {
            client,
            proxy_base: proxy_base.into(),
        }
    }

    /// Builds the outbound request without sending it.
    ///
    /// Header parameters with non-empty values are applied first, then
    /// `Content-Type`, then `Authorization` when a token is present, so the
    /// fixed headers replace any same-named header parameter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidBody`] when a body-bearing method
    /// carries text that is not valid JSON.
    pub fn prepare(
        &self,
        operation: &Operation,
        request: &BoundRequest,
    ) -> Result<OutboundRequest, HttpClientError> {
        let url = compose_url(
            &self.proxy_base,
            &operation.path_template,
            &request.parameters.path,
            &request.parameters.query,
        );

        let body = if operation.method.has_body() {
            Some(parse_body(&request.body_text)?)
        } else {
            None
        };

        let mut headers = Vec::new();
        for (name, value) in &request.parameters.header {
            if !value.is_empty() {
                set_header(&mut headers, name, value);
            }
        }
        set_header(&mut headers, "Content-Type", JSON_CONTENT_TYPE);
        if let Some(token) = &request.auth_token {
            set_header(&mut headers, "Authorization", &token.authorization_value());
        }

        Ok(OutboundRequest {
            method: operation.method,
            url,
            headers,
            body,
        })
    }

    /// Executes the operation and returns the normalized response.
    ///
    /// Issues at most one request. Upstream 4xx/5xx are ordinary responses;
    /// failures to get any response yield a `status = 0` network error.
    pub async fn execute(&self, operation: &Operation, request: &BoundRequest) -> Response {
        let outbound = match self.prepare(operation, request) {
            Ok(outbound) => outbound,
            Err(e) => {
                warn!(operation = %operation.id, error = %e, "request not sent");
                return Response::network_error(e.to_string(), None);
            }
        };

        info!(
            operation = %operation.id,
            method = %outbound.method,
            url = %outbound.url,
            "executing operation"
        );

        let started = Instant::now();
        let outcome = self.client.send(outbound).await;
        let elapsed = started.elapsed();

        match outcome {
            Ok(transport) => {
                let response = normalize(transport, elapsed);
                info!(
                    operation = %operation.id,
                    status = response.status,
                    time_ms = response.time,
                    size = response.size,
                    "operation completed"
                );
                response
            }
            Err(e) => {
                warn!(operation = %operation.id, error = %e, "transport failure");
                Response::network_error(e.to_string(), None)
            }
        }
    }
}

/// Parses editable body text. Blank text is sent as an empty object.
fn parse_body(text: &str) -> Result<Value, HttpClientError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(text).map_err(|e| HttpClientError::InvalidBody(e.to_string()))
}

/// Replaces any header with the same case-insensitive name, then appends.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}

/// Converts a raw upstream response into a [`Response`].
///
/// The body is parsed as JSON when possible and otherwise kept as a JSON
/// string of its (lossily decoded) text.
fn normalize(transport: TransportResponse, elapsed: std::time::Duration) -> Response {
    let data = serde_json::from_slice(&transport.body).unwrap_or_else(|_| {
        debug!(status = transport.status, "response body is not JSON");
        Value::String(String::from_utf8_lossy(&transport.body).into_owned())
    });

    Response::received(
        transport.status,
        transport.status_text,
        data,
        transport.headers,
        elapsed,
    )
}
