//! Constant declarations.

use indexmap::IndexMap;
use sigtree_types::TypeSource;

use super::ensure_single_line;
use crate::{AttrValue, Declaration, Error, RenderOptions, Result, naming::validate_name};

/// A constant declaration: `NAME: Target`.
///
/// Merge semantics match [`TypeAlias`](super::TypeAlias): a constant has one
/// type, so same-named constants unify only when structurally identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    name: String,
    target: TypeSource,
}

impl Constant {
    /// Create a new constant.
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

    /// Create a new constant and run a configuration callback on it.
    pub fn with(
        name: impl Into<String>,
        target: impl Into<TypeSource>,
        configure: impl FnOnce(&mut Self),
    ) -> Result<Self> {
        let mut constant = Self::new(name, target)?;
        configure(&mut constant);
        ensure_single_line(&constant.name, &constant.target)?;
        Ok(constant)
    }

    /// The constant's type.
    pub fn target(&self) -> &TypeSource {
        &self.target
    }

    /// Replace the constant's type.
    pub fn set_target(&mut self, target: impl Into<TypeSource>) {
        self.target = target.into();
    }
}

impl Declaration for Constant {
    const KIND: &'static str = "constant";

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, indent_level: usize, options: &RenderOptions) -> Vec<String> {
        vec![options.indented(
            indent_level,
            &format!("{}: {}", self.name, self.target.render_source()),
        )]
    }

    fn can_merge_with(&self, others: &[Self]) -> bool {
        others.iter().all(|other| other == self)
    }

    fn absorb(&mut self, _others: Vec<Self>) {
        // Nothing to take on: the merge check only admits identical constants.
    }

    fn attributes(&self) -> IndexMap<&'static str, AttrValue> {
        IndexMap::from([("type", AttrValue::source(self.target.render_source()))])
    }
}
