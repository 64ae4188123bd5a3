/// Core domain types for target resolution: coordinates, outcomes, reports.
use std::path::PathBuf;

use serde::Serialize;

/// Position in body matter. Zero in any slot means "not specified"; real
/// ordinals start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyCoordinate {
    /// Chapter ordinal within the part (or within body matter when `part` is 0).
    pub chapter: u32,
    /// Part ordinal, or 0 for a tree without parts.
    pub part: u32,
    /// Section ordinal within the chapter.
    pub section: u32,
}

impl BodyCoordinate {
    /// Dotted notation keeping only up to the most specific non-zero component.
    /// `None` when every component is zero.
    pub fn notation(&self) -> Option<String> {
        let Self { part, chapter, section } = *self;
        return if section != 0 {
            Some(format!("{part}.{chapter}.{section}"))
        } else if chapter != 0 {
            Some(format!("{part}.{chapter}"))
        } else if part != 0 {
            Some(part.to_string())
        } else {
            None
        };
    }
}

/// Position in back matter: an appendix and an optional section inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppendixCoordinate {
    /// Appendix ordinal.
    pub appendix: u32,
    /// Section ordinal within the appendix, or 0 for the appendix itself.
    pub section: u32,
}

impl AppendixCoordinate {
    /// `A.`-prefixed notation, trailing zero section dropped.
    pub fn notation(&self) -> Option<String> {
        let Self { appendix, section } = *self;
        return if section != 0 {
            Some(format!("A.{appendix}.{section}"))
        } else if appendix != 0 {
            Some(format!("A.{appendix}"))
        } else {
            None
        };
    }
}

/// How a specifier addresses the tree. Coordinates are always fully padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressScheme {
    /// Back-matter coordinate written as `A.x` or `A.x.y`.
    Appendix(AppendixCoordinate),
    /// Body-matter coordinate written as `x`, `x.y`, or `x.y.z`.
    Body(BodyCoordinate),
    /// Anything else; handled by name matching.
    NotNumeric,
}

/// One way to reach an ambiguous candidate unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Dotted notation to type instead of the ambiguous name.
    pub notation: String,
    /// The candidate this notation was derived from.
    pub path: PathBuf,
}

/// Produced when name matching finds more than one file.
/// `candidates` is in enumeration order; `suggestions` is a subsequence of it
/// covering only the candidates that have a notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguityReport {
    /// Every matching file.
    pub candidates: Vec<PathBuf>,
    /// Notation suggestions for the candidates that have one.
    pub suggestions: Vec<Suggestion>,
    /// The specifier that matched more than once.
    pub target: String,
}

/// Outcome of resolving one specifier. Never an error: callers match on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Name matching found several files; the user must pick one.
    Ambiguous(AmbiguityReport),
    /// Nothing matched under any scheme.
    NotFound,
    /// Exactly one existing file.
    Resolved {
        /// The resolved file.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_notation_drops_trailing_zeros() {
        let at = |part, chapter, section| BodyCoordinate { part, chapter, section }.notation();
        assert_eq!(at(2, 0, 0).as_deref(), Some("2"));
        assert_eq!(at(2, 3, 0).as_deref(), Some("2.3"));
        assert_eq!(at(2, 3, 4).as_deref(), Some("2.3.4"));
        assert_eq!(at(0, 3, 0).as_deref(), Some("0.3"));
        assert_eq!(at(0, 3, 1).as_deref(), Some("0.3.1"));
        assert_eq!(at(0, 0, 0), None);
    }

    #[test]
    fn appendix_notation_is_prefixed() {
        let at = |appendix, section| AppendixCoordinate { appendix, section }.notation();
        assert_eq!(at(1, 0).as_deref(), Some("A.1"));
        assert_eq!(at(2, 5).as_deref(), Some("A.2.5"));
        assert_eq!(at(0, 0), None);
    }

    #[test]
    fn resolution_serializes_with_kind_tag() {
        let resolved = Resolution::Resolved { path: PathBuf::from("a/b.tex") };
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["kind"], "resolved");
        assert_eq!(json["path"], "a/b.tex");

        let json = serde_json::to_value(Resolution::NotFound).unwrap();
        assert_eq!(json["kind"], "not_found");
    }
}
