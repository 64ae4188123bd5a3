/// Crate-level error types for bookref diagnostics.
use std::path::PathBuf;

use crate::types::Suggestion;

/// Failures surfaced by the CLI layer. Resolution itself never errors; its
/// negative outcomes are turned into these variants only at the edge, each
/// carrying enough context to render a useful diagnostic.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Name matching found several files and the user must disambiguate.
    #[error(
        "ambiguous target: `{target}` matches {}",
        candidates.iter().map(|p| return p.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    AmbiguousTarget {
        /// Every matching file.
        candidates: Vec<PathBuf>,
        /// Latex directory the candidates are displayed relative to.
        latex_dir: PathBuf,
        /// Notations that reach individual candidates.
        suggestions: Vec<Suggestion>,
        /// Specifier that matched more than once.
        target: String,
    },

    /// The target names a helper file that cannot be built on its own.
    #[error("`{target}` is not a standalone file")]
    ExcludedTarget {
        /// The excluded name.
        target: String,
    },

    /// The latex directory does not exist under the project root.
    #[error("latex directory not found: {}", path.display())]
    LatexDirNotFound {
        /// Expected location of the latex directory.
        path: PathBuf,
    },

    /// The file exists but lies outside the numbered areas of the tree.
    #[error("no numeric notation for {}", path.display())]
    NoNotation {
        /// File that has no notation.
        path: PathBuf,
    },

    /// Nothing matched the target under any scheme.
    #[error("target not found: `{target}` in {}", latex_dir.display())]
    TargetNotFound {
        /// Latex directory that was searched.
        latex_dir: PathBuf,
        /// The specifier as typed.
        target: String,
    },

    /// An external tool ran and exited unsuccessfully.
    #[error("{tool} failed with {}", code.map_or_else(|| return "a signal".to_string(), |c| return format!("exit code {c}")))]
    ToolFailed {
        /// Exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// Executable name.
        tool: String,
    },

    /// An external tool could not be started.
    #[error("tool not found: {tool}")]
    ToolNotFound {
        /// Executable name.
        tool: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
