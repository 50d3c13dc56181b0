//! Error types for the schema enumerations.

/// A string did not name any variant of a configuration enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}', expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
    /// Enumeration name (e.g. "encryption mode").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Canonical literals of the enumeration.
    pub expected: &'static [&'static str],
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
