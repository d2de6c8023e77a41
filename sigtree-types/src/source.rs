//! Raw-or-structured type targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeExpr;

/// The type a declaration binds to, given either as raw source text or as a
/// structured [`TypeExpr`].
///
/// Raw text is rendered verbatim; the caller owns its well-formedness.
/// Structured expressions render through [`TypeExpr::render_source`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSource {
    /// Caller-supplied source text, emitted verbatim.
    Raw(String),
    /// A structured expression.
    Expr(TypeExpr),
}

impl TypeSource {
    /// Render this target to a single line of signature source.
    pub fn render_source(&self) -> String {
        match self {
            Self::Raw(text) => text.clone(),
            Self::Expr(expr) => expr.render_source(),
        }
    }
}

impl fmt::Display for TypeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_source())
    }
}

impl From<&str> for TypeSource {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_owned())
    }
}

impl From<String> for TypeSource {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<TypeExpr> for TypeSource {
    fn from(expr: TypeExpr) -> Self {
        Self::Expr(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_renders_verbatim() {
        let target = TypeSource::from("Hash[Symbol, untyped]");
        assert_eq!(target.render_source(), "Hash[Symbol, untyped]");
    }

    #[test]
    fn test_expr_renders_through_expression() {
        let target = TypeSource::from(TypeExpr::optional(TypeExpr::named("String")));
        assert_eq!(target.render_source(), "String?");
    }

    #[test]
    fn test_raw_and_expr_are_distinct() {
        let raw = TypeSource::from("Integer");
        let expr = TypeSource::from(TypeExpr::named("Integer"));
        assert_ne!(raw, expr);
        assert_eq!(raw.render_source(), expr.render_source());
    }
}
