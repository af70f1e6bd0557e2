//! Best-effort lookup of the originating source name for a tree fragment.

use crate::ast::{Ruleset, SyntaxNode};

/// Sentinel returned when no metadata-bearing node can be found.
pub const UNKNOWN_FILE: &str = "unknown";

/// Resolve the originating file name for a ruleset.
///
/// Tries a direct lookup on the first child, then walks the left-most
/// spine of the tree (`node -> first child -> ...`) until a node carrying
/// metadata is found or the spine is exhausted, returning [`UNKNOWN_FILE`]
/// in the latter case.
///
/// This is explicitly not exhaustive: a file whose only metadata-bearing
/// nodes sit off the left spine resolves to the sentinel.
pub fn resolve_file_name(root: &Ruleset) -> String {
    if let Some(info) = root.rules.first().and_then(SyntaxNode::source_info) {
        return info.filename.clone();
    }

    if let Some(info) = &root.source {
        return info.filename.clone();
    }

    let mut current = root.rules.first();
    while let Some(node) = current {
        if let Some(info) = node.source_info() {
            return info.filename.clone();
        }
        current = node.first_child();
    }

    UNKNOWN_FILE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Rule, SourceInfo, ValueExpression};

    fn rule(source: Option<SourceInfo>) -> SyntaxNode {
        SyntaxNode::Rule(Rule {
            names: vec!["color".into()],
            values: vec![ValueExpression::Literal("blue".into())],
            variable: false,
            source,
        })
    }

    #[test]
    fn first_child_metadata_is_returned_verbatim() {
        let root = Ruleset::root(vec![rule(Some(SourceInfo::new("theme.less")))]);
        assert_eq!(resolve_file_name(&root), "theme.less");
    }

    #[test]
    fn left_spine_is_searched_on_direct_miss() {
        let nested = SyntaxNode::Ruleset(Ruleset {
            selectors: vec![],
            rules: vec![rule(Some(SourceInfo::new("nested.less")))],
            source: None,
        });
        let root = Ruleset::root(vec![nested]);
        assert_eq!(resolve_file_name(&root), "nested.less");
    }

    #[test]
    fn exhausted_spine_returns_sentinel() {
        let nested = SyntaxNode::Ruleset(Ruleset {
            selectors: vec![],
            rules: vec![rule(None)],
            source: None,
        });
        let root = Ruleset::root(vec![nested]);
        assert_eq!(resolve_file_name(&root), UNKNOWN_FILE);
    }

    #[test]
    fn metadata_off_the_left_spine_is_not_found() {
        let root = Ruleset::root(vec![
            rule(None),
            rule(Some(SourceInfo::new("off-spine.less"))),
        ]);
        assert_eq!(resolve_file_name(&root), UNKNOWN_FILE);
    }

    #[test]
    fn empty_root_returns_sentinel() {
        let root = Ruleset::root(vec![]);
        assert_eq!(resolve_file_name(&root), UNKNOWN_FILE);
    }
}
