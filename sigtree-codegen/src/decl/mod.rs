//! Declaration nodes.
//!
//! A declaration node represents one emittable type-system construct. Every
//! variant implements the [`Declaration`] contract:
//!
//! - [`TypeAlias`] - `type Name = Target`
//! - [`Constant`] - `NAME: Target`

mod constant;
mod type_alias;

pub use constant::Constant;
pub use type_alias::TypeAlias;

use indexmap::IndexMap;
use sigtree_types::TypeSource;

use crate::{AttrValue, Error, RenderOptions, Result};

/// Contract implemented by every declaration node variant.
///
/// The family is closed: merge plumbing and rendering are generic over a
/// concrete variant, so a group handed to [`can_merge_with`] always holds
/// nodes of the caller's own variant. Equality between nodes is structural,
/// defined per variant, never by identity.
///
/// [`can_merge_with`]: Declaration::can_merge_with
pub trait Declaration: Sized {
    /// Human label for this kind of declaration (e.g., "type alias").
    const KIND: &'static str;

    /// The declared name. Validated at construction and immutable for the
    /// lifetime of the node.
    fn name(&self) -> &str;

    /// Render this node to ordered lines of signature source at the given
    /// indentation.
    ///
    /// Pure: the output depends only on the node's own state,
    /// `indent_level`, and `options`. Rendering a constructed node never
    /// fails.
    fn render(&self, indent_level: usize, options: &RenderOptions) -> Vec<String>;

    /// Whether `self` may stand in for the whole group of `others` during
    /// rendering.
    ///
    /// Reporting `false` is a signal for the caller to surface a conflict,
    /// not an error in itself.
    fn can_merge_with(&self, others: &[Self]) -> bool;

    /// Absorb any additional information from `others` into `self`.
    ///
    /// Callers must only invoke this after [`can_merge_with`] returned true
    /// for that exact set.
    ///
    /// [`can_merge_with`]: Declaration::can_merge_with
    fn absorb(&mut self, others: Vec<Self>);

    /// Ordered field-name to value mapping for debug presentation.
    fn attributes(&self) -> IndexMap<&'static str, AttrValue>;

    /// One-line summary of this node for diagnostics.
    fn describe(&self) -> String {
        let attrs: Vec<String> = self
            .attributes()
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect();
        if attrs.is_empty() {
            format!("{} {}", Self::KIND, self.name())
        } else {
            format!("{} {} ({})", Self::KIND, self.name(), attrs.join(", "))
        }
    }
}

/// Reject targets whose rendered text spans multiple lines.
///
/// Declarations render to exactly one line, so this is checked when a node
/// is built or configured rather than surfacing as malformed output later.
pub(crate) fn ensure_single_line(name: &str, target: &TypeSource) -> Result<()> {
    if target.render_source().contains('\n') {
        return Err(Error::MultilineTarget {
            name: name.to_owned(),
        });
    }
    Ok(())
}
