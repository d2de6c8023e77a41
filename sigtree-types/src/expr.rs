//! Structured type expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A structured type expression that renders itself to signature source.
///
/// Expressions are represented semantically, not as pre-formatted strings,
/// so they can be composed and compared structurally before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A bare type name (e.g., `Integer`, `String`).
    Named(String),
    /// A generic application (e.g., `Hash[String, Integer]`).
    Generic {
        /// Base type name (e.g., "Hash", "Array").
        base: String,
        /// Type arguments, in order.
        args: Vec<TypeExpr>,
    },
    /// An optional type (e.g., `Integer?`).
    Optional(Box<TypeExpr>),
    /// A union of alternatives (e.g., `Integer | String`).
    Union(Vec<TypeExpr>),
    /// A fixed-arity tuple (e.g., `[Integer, String]`).
    Tuple(Vec<TypeExpr>),
}

impl TypeExpr {
    /// Create a named type expression.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a generic type expression.
    pub fn generic(base: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self::Generic {
            base: base.into(),
            args,
        }
    }

    /// Create an optional type expression.
    pub fn optional(inner: TypeExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Create a union type expression.
    pub fn union(members: Vec<TypeExpr>) -> Self {
        Self::Union(members)
    }

    /// Create a tuple type expression.
    pub fn tuple(items: Vec<TypeExpr>) -> Self {
        Self::Tuple(items)
    }

    /// Render this expression to a single line of signature source.
    ///
    /// Rendering is total: every expression has a textual form and no
    /// variant produces more than one line.
    pub fn render_source(&self) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Generic { base, args } => {
                format!("{}[{}]", base, join_rendered(args))
            }
            Self::Optional(inner) => {
                // A union operand binds looser than the optional marker.
                if matches!(inner.as_ref(), Self::Union(_)) {
                    format!("({})?", inner.render_source())
                } else {
                    format!("{}?", inner.render_source())
                }
            }
            Self::Union(members) => {
                let rendered: Vec<String> =
                    members.iter().map(TypeExpr::render_source).collect();
                rendered.join(" | ")
            }
            Self::Tuple(items) => format!("[{}]", join_rendered(items)),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_source())
    }
}

fn join_rendered(exprs: &[TypeExpr]) -> String {
    let rendered: Vec<String> = exprs.iter().map(TypeExpr::render_source).collect();
    rendered.join(", ")
}
