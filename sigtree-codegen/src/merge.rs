//! Merging of same-named declarations.

use indexmap::IndexMap;

use crate::{Declaration, Error, Result};

/// Collapse same-named declarations of one kind into single representatives.
///
/// Nodes are grouped by name with first-appearance order preserved. Within a
/// group the first node stands in for the rest once it has agreed to the
/// merge through [`Declaration::can_merge_with`]; a group whose members
/// diverge yields [`Error::IncompatibleDuplicate`].
///
/// The plumbing operates on one concrete variant at a time. Name collisions
/// across different variants are the tree-level coordinator's concern.
pub fn merge_declarations<T: Declaration>(nodes: Vec<T>) -> Result<Vec<T>> {
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for node in nodes {
        groups.entry(node.name().to_owned()).or_default().push(node);
    }

    let mut merged = Vec::with_capacity(groups.len());
    for (name, mut group) in groups {
        let mut head = group.remove(0);
        if !group.is_empty() {
            if !head.can_merge_with(&group) {
                return Err(Error::IncompatibleDuplicate {
                    kind: T::KIND,
                    name,
                });
            }
            head.absorb(group);
        }
        merged.push(head);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constant, RenderOptions, TypeAlias};

    fn alias(name: &str, target: &str) -> TypeAlias {
        TypeAlias::new(name, target).unwrap()
    }

    #[test]
    fn test_identical_duplicates_collapse_to_one() {
        let merged = merge_declarations(vec![
            alias("Foo", "Integer"),
            alias("Foo", "Integer"),
        ])
        .unwrap();
        assert_eq!(merged, vec![alias("Foo", "Integer")]);
    }

    #[test]
    fn test_first_appearance_order_is_preserved() {
        let merged = merge_declarations(vec![
            alias("Zed", "Integer"),
            alias("Alpha", "String"),
            alias("Zed", "Integer"),
            alias("Mid", "Float"),
        ])
        .unwrap();
        let names: Vec<&str> = merged.iter().map(Declaration::name).collect();
        assert_eq!(names, vec!["Zed", "Alpha", "Mid"]);
    }

    #[test]
    fn test_divergent_duplicate_is_a_conflict() {
        let err = merge_declarations(vec![
            alias("Foo", "Integer"),
            alias("Foo", "String"),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate incompatible type alias 'Foo'");
    }

    #[test]
    fn test_singletons_pass_through() {
        let merged = merge_declarations(vec![
            alias("Foo", "Integer"),
            alias("Bar", "String"),
        ])
        .unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_does_not_change_render_output() {
        let options = RenderOptions::default();
        let solo = alias("Foo", "Integer").render(0, &options);
        let merged = merge_declarations(vec![
            alias("Foo", "Integer"),
            alias("Foo", "Integer"),
            alias("Foo", "Integer"),
        ])
        .unwrap();
        assert_eq!(merged[0].render(0, &options), solo);
    }

    #[test]
    fn test_constants_merge_under_the_same_rule() {
        let merged = merge_declarations(vec![
            Constant::new("VERSION", "String").unwrap(),
            Constant::new("VERSION", "String").unwrap(),
        ])
        .unwrap();
        assert_eq!(merged.len(), 1);

        let err = merge_declarations(vec![
            Constant::new("VERSION", "String").unwrap(),
            Constant::new("VERSION", "Integer").unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate incompatible constant 'VERSION'");
    }
}
