//! Name-based lookup: exact file name, then `name-` prefix, anywhere in the tree.

use std::path::PathBuf;

use crate::index::{DirectoryIndex, has_tex_extension};
use crate::tree::DocumentTree;

/// Whether `name` is on the exclusion list. Excluded names are helper
/// files that are never built on their own.
pub fn is_excluded(name: &str, excluded: &[String]) -> bool {
    return excluded.iter().any(|e| return e == name);
}

/// All `.tex` files whose name is `{name}.tex`; failing that, all whose name
/// starts with `{name}-`. The first stage with any hit short-circuits.
/// Names are compared literally. Excluded names always yield nothing.
pub fn find_matches<I: DirectoryIndex>(tree: &DocumentTree<I>, name: &str, excluded: &[String]) -> Vec<PathBuf> {
    if name.is_empty() || is_excluded(name, excluded) {
        return Vec::new();
    }

    let files: Vec<PathBuf> = tree
        .index()
        .files_under(tree.root())
        .into_iter()
        .filter(|p| return has_tex_extension(p))
        .collect();

    let exact: Vec<PathBuf> = files
        .iter()
        .filter(|p| return p.file_stem().and_then(|s| return s.to_str()) == Some(name))
        .cloned()
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let prefix = format!("{name}-");
    let prefixed: Vec<PathBuf> = files
        .into_iter()
        .filter(|p| return p.file_name().and_then(|s| return s.to_str()).is_some_and(|n| return n.starts_with(&prefix)))
        .collect();
    tracing::debug!(name, count = prefixed.len(), "prefix matches");
    return prefixed;
}
