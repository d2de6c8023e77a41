//! Attribute values for declaration descriptions.

use std::fmt;

/// A value in a declaration's attribute description.
///
/// Source-text fragments print unquoted so that a type expression is
/// distinguishable from an ordinary string-valued attribute in debug output:
/// `type = Integer` versus `doc = "Integer"`.
#[derive(Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A fragment of signature source, printed unquoted.
    Source(String),
    /// An ordinary string value, printed quoted.
    Text(String),
}

impl AttrValue {
    /// Create a source-fragment value.
    pub fn source(text: impl Into<String>) -> Self {
        Self::Source(text.into())
    }

    /// Create a quoted text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(text) => f.write_str(text),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
