//! Query string encoding

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in query values.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped,
/// matching the `encodeURIComponent` rules browsers use.
pub const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single query value.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Builds a query string (without the leading `?`) from bound values.
///
/// Entries with an empty value count as "not provided" and are skipped.
/// Remaining entries keep their order; keys are emitted as-is and values
/// are percent-encoded.
#[must_use]
pub fn encode_query(values: &IndexMap<String, String>) -> String {
    values
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", encode_query_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let query = encode_query(&values(&[("board_id", ""), ("status", "ACTIVE")]));
        assert_eq!(query, "status=ACTIVE");
    }

    #[test]
    fn test_all_empty_yields_empty_string() {
        assert_eq!(encode_query(&values(&[("a", ""), ("b", "")])), "");
        assert_eq!(encode_query(&IndexMap::new()), "");
    }

    #[test]
    fn test_declared_order_is_kept() {
        let query = encode_query(&values(&[("z", "1"), ("a", "2"), ("m", "3")]));
        assert_eq!(query, "z=1&a=2&m=3");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        assert_eq!(encode_query_value("a b&c=d/e"), "a%20b%26c%3Dd%2Fe");
        assert_eq!(encode_query_value("it's (ok)!*~._-"), "it's%20(ok)!*~._-");
        assert_eq!(encode_query_value("é"), "%C3%A9");
    }

    #[test]
    fn test_whitespace_value_is_provided() {
        assert_eq!(encode_query(&values(&[("q", " ")])), "q=%20");
    }
}
