//! Declaration nodes and merge plumbing for the sigtree signature generator.
//!
//! Callers build declaration nodes, let [`merge_declarations`] collapse
//! same-named siblings, then render each surviving node independently into
//! lines of signature source. Rendering is pure and single-line per node;
//! joining lines and writing files belongs to the caller.
//!
//! # Module Organization
//!
//! - [`decl`] - The [`Declaration`] contract and its concrete variants
//! - [`merge`] - Group-by-name merge plumbing
//! - [`options`] - Indentation and formatting options
//! - [`attr`] - Attribute values for debug descriptions
//! - [`error`] - Error and Result types

pub mod attr;
pub mod decl;
pub mod error;
pub mod merge;
pub mod options;

mod naming;

pub use attr::AttrValue;
pub use decl::{Constant, Declaration, TypeAlias};
pub use error::{Error, Result};
pub use merge::merge_declarations;
pub use options::{Indent, RenderOptions};
