//! Syntax tree traversal helpers.

use tree_sitter::Node;

/// Visits `root` and every descendant in pre-order.
pub fn walk<'t>(root: Node<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Returns the first direct child of `node` with the given kind.
#[must_use]
pub fn child_of_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn walk_visits_nested_nodes_in_order() {
        let tree = parse("function f() { debugger; }\ndebugger;\n");
        let mut rows = Vec::new();
        walk(tree.root_node(), |node| {
            if node.kind() == "debugger_statement" {
                rows.push(node.start_position().row);
            }
        });
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn walk_on_empty_source_visits_root_only() {
        let tree = parse("");
        let mut count = 0;
        walk(tree.root_node(), |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn child_of_kind_finds_keyword() {
        let tree = parse("var a = 1;");
        let decl = tree.root_node().named_child(0).unwrap();
        assert_eq!(decl.kind(), "variable_declaration");
        assert!(child_of_kind(&decl, "var").is_some());
        assert!(child_of_kind(&decl, "let").is_none());
    }
}
