//! Numeric coordinate lookup: walks the ordinal-prefixed directory
//! convention down to a single file.
//!
//! Body matter: `part{NN}-*` → `ch{NN}-*` (or roman `chiii-*`) → `sec{NN}-*.tex`.
//! Back matter: `app{NN}-*` → `sec{NN}-*.tex`.
//! When several entries share an ordinal prefix the first one listed wins.

use std::path::{Path, PathBuf};

use crate::index::{DirectoryIndex, EntryKind, IndexEntry};
use crate::roman;
use crate::tree::DocumentTree;
use crate::types::{AddressScheme, AppendixCoordinate, BodyCoordinate};

/// Resolve a classified coordinate to an existing file.
/// `None` is a soft miss; the caller falls back to name matching.
pub fn locate<I: DirectoryIndex>(tree: &DocumentTree<I>, scheme: &AddressScheme) -> Option<PathBuf> {
    let found = match scheme {
        AddressScheme::Appendix(coord) => locate_appendix(tree, coord),
        AddressScheme::Body(coord) => locate_body(tree, coord),
        AddressScheme::NotNumeric => return None,
    };
    if found.is_none() {
        tracing::debug!(?scheme, "no file at coordinate");
    }
    return found;
}

/// Body matter, with or without a part level.
fn locate_body<I: DirectoryIndex>(tree: &DocumentTree<I>, coord: &BodyCoordinate) -> Option<PathBuf> {
    let body = tree.body_root();

    let search_base = if coord.part == 0 {
        body
    } else {
        let part_dir = first_directory(tree, &body, &ordinal_prefix("part", coord.part))?;
        if coord.chapter == 0 {
            let aggregator = part_dir.join(format!("part{:02}.tex", coord.part));
            return existing_file(tree, aggregator);
        }
        part_dir
    };

    let chapter = find_chapter(tree, &search_base, coord.chapter)?;
    return match chapter.kind {
        // A single-file chapter has no sections.
        EntryKind::File => (coord.section == 0).then_some(chapter.path),
        EntryKind::Directory if coord.section == 0 => directory_aggregator(tree, &chapter.path),
        EntryKind::Directory => first_tex_file(tree, &chapter.path, &ordinal_prefix("sec", coord.section)),
    };
}

/// Back matter: appendix directory, then its aggregator or a section.
fn locate_appendix<I: DirectoryIndex>(
    tree: &DocumentTree<I>,
    coord: &AppendixCoordinate,
) -> Option<PathBuf> {
    let app_dir = first_directory(tree, &tree.back_root(), &ordinal_prefix("app", coord.appendix))?;
    if coord.section == 0 {
        return directory_aggregator(tree, &app_dir);
    }
    return first_tex_file(tree, &app_dir, &ordinal_prefix("sec", coord.section));
}

/// Zero-padded chapter prefix first, then the roman spelling for 1 through 10.
fn find_chapter<I: DirectoryIndex>(tree: &DocumentTree<I>, base: &Path, chapter: u32) -> Option<IndexEntry> {
    if let Some(entry) = first_chapter_entry(tree, base, &ordinal_prefix("ch", chapter)) {
        return Some(entry);
    }
    let numeral = roman::to_roman(chapter)?;
    tracing::debug!(chapter, numeral, "retrying chapter with roman prefix");
    return first_chapter_entry(tree, base, &format!("ch{numeral}-"));
}

/// A chapter is either a directory or a standalone `.tex` file.
fn first_chapter_entry<I: DirectoryIndex>(tree: &DocumentTree<I>, base: &Path, prefix: &str) -> Option<IndexEntry> {
    return tree
        .index()
        .children_with_prefix(base, prefix)
        .into_iter()
        .find(|e| return e.kind == EntryKind::Directory || e.is_tex_file());
}

/// First directory under `base` whose name starts with `prefix`.
fn first_directory<I: DirectoryIndex>(tree: &DocumentTree<I>, base: &Path, prefix: &str) -> Option<PathBuf> {
    return tree
        .index()
        .children_with_prefix(base, prefix)
        .into_iter()
        .find(|e| return e.kind == EntryKind::Directory)
        .map(|e| return e.path);
}

/// First `.tex` file under `base` whose name starts with `prefix`.
fn first_tex_file<I: DirectoryIndex>(tree: &DocumentTree<I>, base: &Path, prefix: &str) -> Option<PathBuf> {
    return tree
        .index()
        .children_with_prefix(base, prefix)
        .into_iter()
        .find(IndexEntry::is_tex_file)
        .map(|e| return e.path);
}

/// `dir/{dirname}.tex`, the file that pulls in a chapter's or appendix's children.
fn directory_aggregator<I: DirectoryIndex>(tree: &DocumentTree<I>, dir: &Path) -> Option<PathBuf> {
    let name = dir.file_name()?.to_str()?;
    return existing_file(tree, dir.join(format!("{name}.tex")));
}

/// `path` if the index knows it as a file.
fn existing_file<I: DirectoryIndex>(tree: &DocumentTree<I>, path: PathBuf) -> Option<PathBuf> {
    return tree.index().is_file(&path).then_some(path);
}

/// `part03-`, `ch12-`, `sec05-`: tag, two-digit ordinal, hyphen.
fn ordinal_prefix(tag: &str, ordinal: u32) -> String {
    return format!("{tag}{ordinal:02}-");
}
