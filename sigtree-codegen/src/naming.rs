//! Validation for declaration names.

/// Validate that a name is a valid declaration identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    // Remaining characters must be alphanumeric or underscore
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Foo").is_none());
        assert!(validate_name("foo_bar").is_none());
        assert!(validate_name("_private").is_none());
        assert!(validate_name("Alias2").is_none());
        assert!(validate_name("MAX_RETRIES").is_none());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_name(""), Some("name cannot be empty"));
    }

    #[test]
    fn test_invalid_first_character() {
        assert_eq!(
            validate_name("9lives"),
            Some("name must start with a letter or underscore")
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_name("foo-bar"),
            Some("name must contain only letters, numbers, and underscores")
        );
        assert_eq!(
            validate_name("a b"),
            Some("name must contain only letters, numbers, and underscores")
        );
        assert_eq!(
            validate_name("foo.bar"),
            Some("name must contain only letters, numbers, and underscores")
        );
    }
}
