//! Path filtering for target discovery.

use std::path::Path;

/// Checks whether a root-relative path matches any exclude pattern.
///
/// Patterns are globs (`**/dist/**`). A pattern without glob
/// metacharacters is also treated as a path prefix, so the plain
/// directory names found in `tsconfig.json` (`"build"`) work too.
#[must_use]
pub fn is_excluded(relative: &Path, patterns: &[String]) -> bool {
    let path_str = relative.to_string_lossy();

    for pattern in patterns {
        match glob::Pattern::new(pattern) {
            Ok(glob_pattern) => {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }
            Err(e) => tracing::warn!("Ignoring invalid exclude pattern `{}`: {}", pattern, e),
        }

        let is_literal = !pattern.contains(['*', '?', '[']);
        if is_literal && relative.starts_with(pattern.trim_start_matches("./")) {
            return true;
        }
    }

    false
}
