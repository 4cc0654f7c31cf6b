//! Response record type
//!
//! Contains the uniform response record produced for every execution,
//! the status classification used for display, and size formatting.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Status text reported for transport-level failures.
pub const NETWORK_ERROR: &str = "Network Error";

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns the canonical reason phrase for common status codes.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            0 => NETWORK_ERROR,
            100 => "Continue",
            101 => "Switching Protocols",
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            204 => "No Content",
            301 => "Moved Permanently",
            302 => "Found",
            304 => "Not Modified",
            307 => "Temporary Redirect",
            308 => "Permanent Redirect",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            408 => "Request Timeout",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }

    /// Returns the display category of this status.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn category(&self) -> StatusCategory {
        StatusCategory::classify(self.0 as i64)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Display category of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusCategory {
    /// 2xx
    Success,
    /// 3xx
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx and above
    ServerError,
    /// Everything else, including `0` (transport failure), 1xx and negatives
    Unknown,
}

impl StatusCategory {
    /// Classifies any integer status. Total: every value maps to exactly
    /// one category.
    #[must_use]
    pub const fn classify(status: i64) -> Self {
        match status {
            200..=299 => Self::Success,
            300..=399 => Self::Redirect,
            400..=499 => Self::ClientError,
            500.. => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Returns the category name used by presentation layers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Redirect => "redirect",
            Self::ClientError => "clientError",
            Self::ServerError => "serverError",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The uniform result of one execution.
///
/// A transport failure is still a `Response`: `status` is `0`,
/// `status_text` is [`NETWORK_ERROR`] and `data` carries `{error, details}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code, or `0` for transport failure.
    pub status: u16,
    /// Short human-readable status description.
    pub status_text: String,
    /// Parsed payload, or the error envelope on transport failure.
    pub data: Value,
    /// Response headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Elapsed milliseconds.
    pub time: u64,
    /// Byte length of `data` serialized as JSON text.
    pub size: usize,
}

impl Response {
    /// Creates a response from a received upstream outcome.
    ///
    /// `size` is computed from `data` and `time` is `elapsed` rounded to the
    /// nearest millisecond.
    #[must_use]
    pub fn received(
        status: impl Into<StatusCode>,
        status_text: impl Into<String>,
        data: Value,
        headers: BTreeMap<String, String>,
        elapsed: Duration,
    ) -> Self {
        let status = status.into();
        let size = serialized_size(&data);
        Self {
            status: status.as_u16(),
            status_text: status_text.into(),
            data,
            headers,
            time: round_millis(elapsed),
            size,
        }
    }

    /// Creates the response for a request that never produced an upstream
    /// answer.
    #[must_use]
    pub fn network_error(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            status: 0,
            status_text: NETWORK_ERROR.to_string(),
            data: json!({
                "error": message.into(),
                "details": details.unwrap_or(Value::Null),
            }),
            headers: BTreeMap::new(),
            time: 0,
            size: 0,
        }
    }

    /// Returns true if no upstream response was received.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        self.status == 0
    }

    /// Returns the display category of the status.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn category(&self) -> StatusCategory {
        StatusCategory::classify(self.status as i64)
    }

    /// Returns the error message of a network-error envelope.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.is_network_error() {
            self.data.get("error").and_then(Value::as_str)
        } else {
            None
        }
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Byte length of a value serialized as compact JSON.
#[must_use]
pub fn serialized_size(data: &Value) -> usize {
    serde_json::to_string(data).map_or(0, |text| text.len())
}

/// Rounds a duration to the nearest whole millisecond.
#[must_use]
pub fn round_millis(elapsed: Duration) -> u64 {
    let millis = (elapsed.as_micros() + 500) / 1000;
    u64::try_from(millis).unwrap_or(u64::MAX)
}

/// Formats a byte count for display: `B` below 1 KiB, then `KB` and `MB`
/// with one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;

    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
