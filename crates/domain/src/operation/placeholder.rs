//! Placeholder parser for `:name` path templates
//!
//! Extracts placeholder tokens with their byte spans so that substitution
//! can operate on whole tokens (`:card` never matches inside `:card_id`).

use std::ops::Range;

/// A placeholder token found in a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The placeholder name (without the leading `:`).
    pub name: String,

    /// Byte range of the whole token, including the leading `:`.
    pub span: Range<usize>,
}

impl Placeholder {
    /// Creates a new placeholder reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

const fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Parses a path template and extracts all placeholder tokens in order.
///
/// A placeholder is a `:` followed by one or more ASCII letters, digits or
/// underscores. A lone `:` is literal text.
///
/// # Examples
///
/// ```
/// use apiconsole_domain::operation::parse_placeholders;
///
/// let found = parse_placeholders("/api/v2/cards/:card_id/checklists/:id");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].name, "card_id");
/// assert_eq!(found[1].name, "id");
/// ```
#[must_use]
pub fn parse_placeholders(template: &str) -> Vec<Placeholder> {
    let bytes = template.as_bytes();
    let mut placeholders = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b':' {
            let start = index;
            let mut end = index + 1;
            while end < bytes.len() && is_name_byte(bytes[end]) {
                end += 1;
            }
            if end > start + 1 {
                placeholders.push(Placeholder::new(&template[start + 1..end], start..end));
                index = end;
                continue;
            }
        }
        index += 1;
    }

    placeholders
}
