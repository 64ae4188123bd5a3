//! The document tree: a root directory split into three named areas.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::index::DirectoryIndex;

/// Names of the three top-level area directories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Back matter: appendices.
    pub back: String,
    /// Body matter: parts, chapters, sections.
    pub body: String,
    /// Front matter: no numeric addressing.
    pub front: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            back: "300-backmatter".to_string(),
            body: "200-bodymatter".to_string(),
            front: "100-frontmatter".to_string(),
        }
    }
}

/// Which top-level area a path lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Under the back-matter directory.
    Back,
    /// Under the body-matter directory.
    Body,
    /// Under the front-matter directory.
    Front,
}

/// Read-only view of a document tree. Borrows nothing from the filesystem
/// and holds no handles; every query goes through the index.
pub struct DocumentTree<I> {
    /// Directory listing backend.
    index: I,
    /// Names of the front, body and back areas.
    layout: Layout,
    /// The latex directory.
    root: PathBuf,
}

impl<I: DirectoryIndex> DocumentTree<I> {
    /// Wrap a root directory and its area layout.
    pub fn new(root: impl Into<PathBuf>, layout: Layout, index: I) -> Self {
        return Self { index, layout, root: root.into() };
    }

    /// Classify the first component of a tree-relative path.
    pub fn area_of(&self, first_component: &str) -> Option<Area> {
        return if first_component == self.layout.body {
            Some(Area::Body)
        } else if first_component == self.layout.back {
            Some(Area::Back)
        } else if first_component == self.layout.front {
            Some(Area::Front)
        } else {
            None
        };
    }

    /// Directory holding appendices.
    pub fn back_root(&self) -> PathBuf {
        return self.root.join(&self.layout.back);
    }

    /// Directory holding parts (or chapters, in a tree without parts).
    pub fn body_root(&self) -> PathBuf {
        return self.root.join(&self.layout.body);
    }

    /// Listing backend.
    pub const fn index(&self) -> &I {
        return &self.index;
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        return &self.root;
    }
}
