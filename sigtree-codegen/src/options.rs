//! Indentation and formatting options for rendering.

/// Indentation style for rendered signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

/// Read-only formatting configuration passed into every render call.
///
/// Nodes obtain indented lines through [`RenderOptions::indented`] and treat
/// the result opaquely; the options value itself is never mutated during a
/// render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Indentation unit used for nested declarations.
    pub indent: Indent,
}

impl RenderOptions {
    /// Create options with the given indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Prefix `text` with the indentation unit repeated `level` times.
    pub fn indented(&self, level: usize, text: &str) -> String {
        let mut line = String::with_capacity(level * self.indent.as_str().len() + text.len());
        for _ in 0..level {
            line.push_str(self.indent.as_str());
        }
        line.push_str(text);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }

    #[test]
    fn test_indented_at_level_zero() {
        let options = RenderOptions::default();
        assert_eq!(options.indented(0, "type Foo = Integer"), "type Foo = Integer");
    }

    #[test]
    fn test_indented_repeats_unit() {
        let options = RenderOptions::new(Indent::Spaces(2));
        assert_eq!(options.indented(2, "x"), "    x");

        let options = RenderOptions::new(Indent::Tab);
        assert_eq!(options.indented(3, "x"), "\t\t\tx");
    }
}
