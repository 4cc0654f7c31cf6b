//! Path/query composition
//!
//! Renders the concrete request URL from the proxy base, the operation's
//! path template and the bound values.

use indexmap::IndexMap;

use super::query::encode_query;
use crate::operation::parse_placeholders;

/// Substitutes bound values into a `:name` path template.
///
/// Values are inserted verbatim, without escaping, so a developer can send
/// deliberately malformed paths. Placeholders with no bound value stay as
/// literal text, which leaves a visibly broken URL instead of a silent
/// default. Every occurrence of a bound placeholder is replaced, and
/// inserted values are never rescanned for placeholders.
#[must_use]
pub fn substitute_path(template: &str, path_values: &IndexMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut cursor = 0;

    for placeholder in parse_placeholders(template) {
        let Some(value) = path_values.get(&placeholder.name) else {
            continue;
        };
        rendered.push_str(&template[cursor..placeholder.span.start]);
        rendered.push_str(value);
        cursor = placeholder.span.end;
    }

    rendered.push_str(&template[cursor..]);
    rendered
}

/// Composes the full request URL.
///
/// `base` is the fixed proxy prefix; a trailing `/` on it is dropped so the
/// template's leading `/` is not doubled. The query string is appended after
/// `?` only when at least one value is non-empty.
#[must_use]
pub fn compose_url(
    base: &str,
    template: &str,
    path_values: &IndexMap<String, String>,
    query_values: &IndexMap<String, String>,
) -> String {
    let mut url = format!(
        "{}{}",
        base.trim_end_matches('/'),
        substitute_path(template, path_values)
    );

    let query = encode_query(query_values);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    url
}
