//! JSON serialization helpers for deterministic output.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes a value to pretty JSON with 2-space indentation and a
/// trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Same as [`to_json_stable`], returning bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    to_json_stable(value).map(String::into_bytes)
}

/// Deserializes JSON from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SerializationError> {
    serde_json::from_str(json).map_err(SerializationError::Deserialize)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use apiconsole_domain::{ConsoleSettings, Response};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_response_output_shape() {
        let json = to_json_stable(&Response::network_error("boom", None)).unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.contains("  \"statusText\": \"Network Error\""));
        // Field order follows the struct.
        let status = json.find("\"status\"").unwrap();
        let size = json.find("\"size\"").unwrap();
        assert!(status < size);
    }

    #[test]
    fn test_value_key_order_is_preserved() {
        let value: serde_json::Value = from_json(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let json = to_json_stable(&value).unwrap();
        assert!(json.find("zeta").unwrap() < json.find("alpha").unwrap());
    }

    #[test]
    fn test_settings_roundtrip_via_bytes() {
        let settings = ConsoleSettings::default().with_proxy_base("https://gateway.local/proxy");
        let bytes = to_json_stable_bytes(&settings).unwrap();
        let back: ConsoleSettings = from_json_bytes(&bytes).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_invalid_json_is_deserialize_error() {
        let result: Result<ConsoleSettings, _> = from_json("{not json");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
