use crate::ambiguity::build_report;
use crate::index::DirectoryIndex;
use crate::locator::locate;
use crate::matcher::{find_matches, is_excluded};
use crate::specifier::classify;
use crate::tree::DocumentTree;
use crate::types::{AddressScheme, Resolution};

/// Resolve one target specifier against a document tree.
///
/// Numeric coordinates are tried first; a miss falls through to name
/// matching rather than failing, so a file literally named `2.tex` is still
/// reachable. Several name matches are never narrowed down automatically.
pub fn resolve<I: DirectoryIndex>(tree: &DocumentTree<I>, target: &str, excluded: &[String]) -> Resolution {
    if is_excluded(target, excluded) {
        tracing::debug!(specifier = target, "excluded target");
        return Resolution::NotFound;
    }

    let scheme = classify(target);
    tracing::debug!(specifier = target, ?scheme, "classified target");
    if scheme != AddressScheme::NotNumeric {
        if let Some(path) = locate(tree, &scheme) {
            return Resolution::Resolved { path };
        }
        tracing::debug!(specifier = target, "numeric lookup missed, trying names");
    }

    let mut candidates = find_matches(tree, target, excluded);
    return match candidates.len() {
        0 => Resolution::NotFound,
        1 => match candidates.pop() {
            Some(path) => Resolution::Resolved { path },
            None => Resolution::NotFound,
        },
        _ => Resolution::Ambiguous(build_report(tree, target, candidates)),
    };
}
