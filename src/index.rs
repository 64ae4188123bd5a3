//! Directory listing behind a small trait, so resolution logic can run
//! against the real filesystem or an in-memory tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Whether an index entry is a directory or something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory (symlinks to directories count).
    Directory,
    /// A regular file.
    File,
}

/// A direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Directory or file.
    pub kind: EntryKind,
    /// Full path of the child.
    pub path: PathBuf,
}

impl IndexEntry {
    /// True for a regular file with a `.tex` extension.
    pub fn is_tex_file(&self) -> bool {
        return self.kind == EntryKind::File && has_tex_extension(&self.path);
    }
}

/// Read-only view of a directory tree. All listings are in enumeration
/// order; nothing is sorted, so the first of several equal-prefixed
/// entries is whatever the backing store yields first.
pub trait DirectoryIndex {
    /// Direct children of `dir` whose file name starts with `prefix`.
    /// A missing or unreadable `dir` lists as empty.
    fn children_with_prefix(&self, dir: &Path, prefix: &str) -> Vec<IndexEntry>;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Every regular file below `root`, recursively.
    fn files_under(&self, root: &Path) -> Vec<PathBuf>;
}

/// Filesystem-backed index.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsIndex;

impl DirectoryIndex for FsIndex {
    fn children_with_prefix(&self, dir: &Path, prefix: &str) -> Vec<IndexEntry> {
        let mut out = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    continue;
                },
            };
            let matches_prefix = entry.file_name().to_str().is_some_and(|n| return n.starts_with(prefix));
            if !matches_prefix {
                continue;
            }
            let path = entry.into_path();
            // `is_dir`/`is_file` follow symlinks, so dangling links, FIFOs and sockets fall through.
            let kind = if path.is_dir() {
                EntryKind::Directory
            } else if path.is_file() {
                EntryKind::File
            } else {
                tracing::debug!(path = %path.display(), "skipping entry that is neither file nor directory");
                continue;
            };
            out.push(IndexEntry { kind, path });
        }
        return out;
    }

    fn is_file(&self, path: &Path) -> bool {
        return path.is_file();
    }

    fn files_under(&self, root: &Path) -> Vec<PathBuf> {
        return WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| return match entry {
                Ok(e) => Some(e),
                Err(e) => {
                    tracing::debug!(root = %root.display(), error = %e, "skipping unreadable entry");
                    None
                },
            })
            .filter(|e| return e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect();
    }
}

/// Case-insensitive `.tex` extension check.
pub fn has_tex_extension(path: &Path) -> bool {
    return path
        .extension()
        .and_then(|e| return e.to_str())
        .is_some_and(|e| return e.eq_ignore_ascii_case("tex"));
}

/// In-memory tree made of file paths; directories are implied by them.
/// Listing order follows insertion order, which lets tests pin down
/// first-match-wins behaviour deterministically.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    files: Vec<PathBuf>,
}

#[cfg(test)]
impl MemoryIndex {
    /// Build an index from file paths, in the given order.
    pub fn new<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Self {
        Self {
            files: files.into_iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }
}

#[cfg(test)]
impl DirectoryIndex for MemoryIndex {
    fn children_with_prefix(&self, dir: &Path, prefix: &str) -> Vec<IndexEntry> {
        let mut out: Vec<IndexEntry> = Vec::new();
        for file in &self.files {
            let Ok(rest) = file.strip_prefix(dir) else { continue };
            let mut components = rest.components();
            let Some(first) = components.next() else { continue };
            let name = first.as_os_str();
            if !name.to_str().is_some_and(|n| n.starts_with(prefix)) {
                continue;
            }
            let path = dir.join(name);
            if out.iter().any(|e| e.path == path) {
                continue;
            }
            let kind = if components.next().is_some() { EntryKind::Directory } else { EntryKind::File };
            out.push(IndexEntry { kind, path });
        }
        out
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }

    fn files_under(&self, root: &Path) -> Vec<PathBuf> {
        self.files.iter().filter(|f| f.starts_with(root)).cloned().collect()
    }
}
