//! Error types for declaration construction and merging.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for sigtree-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or merging declarations.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The declaration name is not a valid identifier.
    #[error("invalid declaration name '{name}'")]
    #[diagnostic(
        code(sigtree::invalid_name),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// The declaration target spans more than one line.
    #[error("target of '{name}' spans multiple lines")]
    #[diagnostic(
        code(sigtree::multiline_target),
        help("a declaration renders to a single line; remove newlines from the target text")
    )]
    MultilineTarget {
        /// Name of the declaration with the offending target.
        name: String,
    },

    /// Two same-named declarations of one kind have incompatible bodies.
    #[error("duplicate incompatible {kind} '{name}'")]
    #[diagnostic(
        code(sigtree::incompatible_duplicate),
        help("declarations sharing a name are unified only when their bodies are identical")
    )]
    IncompatibleDuplicate {
        /// Human label of the declaration kind (e.g., "type alias").
        kind: &'static str,
        /// The shared name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidName {
            name: "9lives".to_owned(),
            reason: "name must start with a letter or underscore",
        };
        assert_eq!(err.to_string(), "invalid declaration name '9lives'");

        let err = Error::IncompatibleDuplicate {
            kind: "type alias",
            name: "Foo".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicate incompatible type alias 'Foo'");
    }
}
