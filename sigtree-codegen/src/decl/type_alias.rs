//! Type alias declarations.

use indexmap::IndexMap;
use sigtree_types::TypeSource;

use super::ensure_single_line;
use crate::{AttrValue, Declaration, Error, RenderOptions, Result, naming::validate_name};

/// A type alias declaration: `type Name = Target`.
///
/// An alias has exactly one definition, so two aliases unify only when they
/// are structurally identical; any divergence under a shared name is left
/// for the merge caller to surface as a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    name: String,
    target: TypeSource,
}

impl TypeAlias {
    /// Create a new type alias.
    ///
    /// Fails eagerly when `name` is not a valid identifier or when the
    /// target's rendered text spans multiple lines.
    pub fn new(name: impl Into<String>, target: impl Into<TypeSource>) -> Result<Self> {
        let name = name.into();
        if let Some(reason) = validate_name(&name) {
            return Err(Error::InvalidName { name, reason });
        }
        let target = target.into();
        ensure_single_line(&name, &target)?;
        Ok(Self { name, target })
    }

    /// Create a new type alias and run a configuration callback on it.
    ///
    /// The callback receives the freshly constructed node exactly once,
    /// synchronously and with exclusive access, before the node is exposed
    /// to anything else. The target is re-checked after configuration.
    pub fn with(
        name: impl Into<String>,
        target: impl Into<TypeSource>,
        configure: impl FnOnce(&mut Self),
    ) -> Result<Self> {
        let mut alias = Self::new(name, target)?;
        configure(&mut alias);
        ensure_single_line(&alias.name, &alias.target)?;
        Ok(alias)
    }

    /// The aliased type.
    pub fn target(&self) -> &TypeSource {
        &self.target
    }

    /// Replace the aliased type.
    ///
    /// Intended for the configuration callback of [`TypeAlias::with`],
    /// which re-validates the target afterwards.
    pub fn set_target(&mut self, target: impl Into<TypeSource>) {
        self.target = target.into();
    }
}

impl Declaration for TypeAlias {
    const KIND: &'static str = "type alias";

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, indent_level: usize, options: &RenderOptions) -> Vec<String> {
        vec![options.indented(
            indent_level,
            &format!("type {} = {}", self.name, self.target.render_source()),
        )]
    }

    fn can_merge_with(&self, others: &[Self]) -> bool {
        others.iter().all(|other| other == self)
    }

    fn absorb(&mut self, _others: Vec<Self>) {
        // Nothing to take on: the merge check only admits identical aliases.
    }

    fn attributes(&self) -> IndexMap<&'static str, AttrValue> {
        IndexMap::from([("type", AttrValue::source(self.target.render_source()))])
    }
}
