//! Turning several name matches into an actionable report.

use std::path::PathBuf;

use crate::index::DirectoryIndex;
use crate::notation::to_notation;
use crate::tree::DocumentTree;
use crate::types::{AmbiguityReport, Suggestion};

/// Pair every candidate that has a notation with it, keeping candidate order.
/// The full candidate list is kept even when no suggestion can be derived.
pub fn build_report<I: DirectoryIndex>(
    tree: &DocumentTree<I>,
    target: &str,
    candidates: Vec<PathBuf>,
) -> AmbiguityReport {
    let suggestions: Vec<Suggestion> = candidates
        .iter()
        .filter_map(|path| {
            let notation = to_notation(tree, path)?;
            return Some(Suggestion { notation, path: path.clone() });
        })
        .collect();

    tracing::debug!(
        specifier = target,
        candidates = candidates.len(),
        suggestions = suggestions.len(),
        "ambiguous target"
    );

    return AmbiguityReport {
        candidates,
        suggestions,
        target: target.to_string(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemoryIndex;
    use crate::tree::Layout;

    #[test]
    fn suggestions_follow_candidate_order_and_skip_front_matter() {
        let tree = DocumentTree::new("latex", Layout::default(), MemoryIndex::default());
        let candidates = vec![
            PathBuf::from("latex/200-bodymatter/part02-b/ch01-overview/ch01-overview.tex"),
            PathBuf::from("latex/100-frontmatter/ch01-foreword.tex"),
            PathBuf::from("latex/200-bodymatter/part01-a/ch01-intro/ch01-intro.tex"),
        ];

        let report = build_report(&tree, "ch01", candidates.clone());

        assert_eq!(report.target, "ch01");
        assert_eq!(report.candidates, candidates);
        assert_eq!(
            report.suggestions,
            vec![
                Suggestion { notation: "2.1".to_string(), path: candidates[0].clone() },
                Suggestion { notation: "1.1".to_string(), path: candidates[2].clone() },
            ]
        );
    }

    #[test]
    fn report_without_any_suggestion() {
        let tree = DocumentTree::new("latex", Layout::default(), MemoryIndex::default());
        let candidates = vec![PathBuf::from("latex/notes-a.tex"), PathBuf::from("latex/notes-b.tex")];
        let report = build_report(&tree, "notes", candidates);
        assert_eq!(report.candidates.len(), 2);
        assert!(report.suggestions.is_empty());
    }
}
