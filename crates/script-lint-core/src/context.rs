//! Context types for rule execution.

use std::path::Path;

use crate::rule::Rule;
use crate::types::{Location, Violation};

/// Context provided to per-file rules.
///
/// Contains metadata about the file being analyzed that rules can use
/// to make context-aware decisions (e.g., relax checks in test files).
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path relative to the project root.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file is detected as a test file.
    pub is_test: bool,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            content,
            is_test: Self::detect_test_file(path),
        }
    }

    /// Detects if a file is a test file based on path conventions.
    fn detect_test_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "__tests__" || s == "test" || s == "tests" {
                    return true;
                }
            }
        }

        // foo.test.js, foo.spec.tsx, ...
        path.file_stem()
            .and_then(|n| n.to_str())
            .is_some_and(|stem| stem.ends_with(".test") || stem.ends_with(".spec"))
    }

    /// Source text of `node`.
    #[must_use]
    pub fn text(&self, node: &tree_sitter::Node<'_>) -> &'a str {
        self.content
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    /// Location covering `node` in this file.
    #[must_use]
    pub fn location(&self, node: &tree_sitter::Node<'_>) -> Location {
        Location::from_node(self.path.to_path_buf(), node)
    }

    /// Builds a violation of `rule` at `node` with the rule's default severity.
    #[must_use]
    pub fn violation<R: Rule + ?Sized>(
        &self,
        rule: &R,
        node: &tree_sitter::Node<'_>,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(
            rule.code(),
            rule.name(),
            rule.default_severity(),
            self.location(node),
            message,
        )
    }
}
