//! Core CLI commands for bookref: resolve, notation, compile.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::compile;
use crate::config::Config;
use crate::error;
use crate::index::FsIndex;
use crate::matcher::is_excluded;
use crate::notation::to_notation;
use crate::resolver;
use crate::tree::DocumentTree;
use crate::types::Resolution;

/// Exit code for an ambiguous target, distinct from plain failure.
pub const EXIT_AMBIGUOUS: u8 = 2;

/// Resolve a target and print its path relative to the project root.
/// With `json`, print the raw resolution instead and leave diagnostics out.
///
/// # Errors
///
/// Returns errors from config loading, a missing latex directory, an
/// excluded target, or a target that is not found or ambiguous.
pub fn resolve(root: &Path, target: &str, json: bool) -> Result<ExitCode, error::Error> {
    let config = Config::load(root)?;
    let latex_dir = existing_latex_dir(root, &config)?;
    let tree = DocumentTree::new(&latex_dir, config.layout.clone(), FsIndex);
    let resolution = resolver::resolve(&tree, target, &config.exclude);

    if json {
        let rendered = serde_json::to_string_pretty(&resolution).map_err(std::io::Error::other)?;
        println!("{rendered}");
        return Ok(match resolution {
            Resolution::Ambiguous(_) => ExitCode::from(EXIT_AMBIGUOUS),
            Resolution::NotFound => ExitCode::FAILURE,
            Resolution::Resolved { .. } => ExitCode::SUCCESS,
        });
    }

    let path = into_resolved_path(resolution, target, &latex_dir, &config)?;
    println!("{}", path.strip_prefix(root).unwrap_or(&path).display());
    return Ok(ExitCode::SUCCESS);
}

/// Print the dotted notation for an existing file in the document tree.
/// A relative `file` is taken relative to `root`, like the latex directory.
///
/// # Errors
///
/// Returns `Error::Io` if either path cannot be canonicalized, or
/// `Error::NoNotation` if the file is outside the numbered areas.
pub fn notation(root: &Path, file: &Path) -> Result<(), error::Error> {
    let config = Config::load(root)?;
    let latex_dir = existing_latex_dir(root, &config)?;

    // Canonical forms so that `./latex/..` and symlinked roots compare equal.
    let canonical_root = std::fs::canonicalize(&latex_dir)?;
    let canonical_file = std::fs::canonicalize(root.join(file))?;
    let tree = DocumentTree::new(canonical_root, config.layout, FsIndex);

    let Some(notation) = to_notation(&tree, &canonical_file) else {
        return Err(error::Error::NoNotation { path: file.to_path_buf() });
    };
    println!("{notation}");
    return Ok(());
}

/// Resolve a target and typeset it.
///
/// # Errors
///
/// Returns resolution errors as for [`resolve`], plus errors from the
/// compile driver.
pub fn compile(root: &Path, target: Option<&str>, bib: bool) -> Result<(), error::Error> {
    let config = Config::load(root)?;
    let latex_dir = existing_latex_dir(root, &config)?;
    let target = target.unwrap_or(&config.compile.default_target);

    let tree = DocumentTree::new(&latex_dir, config.layout.clone(), FsIndex);
    let resolution = resolver::resolve(&tree, target, &config.exclude);
    let tex_file = into_resolved_path(resolution, target, &latex_dir, &config)?;

    compile::run(&tex_file, &latex_dir, bib, &config.compile)?;
    return Ok(());
}

/// The latex directory, checked to exist.
///
/// # Errors
///
/// Returns `Error::LatexDirNotFound` if it is not a directory.
fn existing_latex_dir(root: &Path, config: &Config) -> Result<PathBuf, error::Error> {
    let latex_dir = config.latex_root(root);
    if !latex_dir.is_dir() {
        return Err(error::Error::LatexDirNotFound { path: latex_dir });
    }
    return Ok(latex_dir);
}

/// Turn a non-resolved outcome into the matching diagnostic error.
///
/// # Errors
///
/// Returns `Error::ExcludedTarget`, `Error::TargetNotFound`, or
/// `Error::AmbiguousTarget` for anything but a single resolved file.
fn into_resolved_path(
    resolution: Resolution,
    target: &str,
    latex_dir: &Path,
    config: &Config,
) -> Result<PathBuf, error::Error> {
    return match resolution {
        Resolution::Resolved { path } => Ok(path),
        Resolution::Ambiguous(report) => Err(error::Error::AmbiguousTarget {
            candidates: report.candidates,
            latex_dir: latex_dir.to_path_buf(),
            suggestions: report.suggestions,
            target: report.target,
        }),
        Resolution::NotFound if is_excluded(target, &config.exclude) => {
            Err(error::Error::ExcludedTarget { target: target.to_string() })
        },
        Resolution::NotFound => Err(error::Error::TargetNotFound {
            latex_dir: latex_dir.to_path_buf(),
            target: target.to_string(),
        }),
    };
}
