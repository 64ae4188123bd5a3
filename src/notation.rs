//! Path → dotted notation: the inverse of the coordinate locator.
//!
//! Every path the locator can produce maps back to a specifier that
//! locates the same path again.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

use crate::index::DirectoryIndex;
use crate::roman;
use crate::tree::{Area, DocumentTree};
use crate::types::{AppendixCoordinate, BodyCoordinate};

/// A level tag and its ordinal, ending at a hyphen, a dot, or the end of the name.
static LEVEL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^(part|app|sec|ch)([0-9]+|[ivx]+)(?:[-.]|$)").expect("valid regex"));

/// Notation that reaches `path`, or `None` for front matter, files outside
/// the tree, or paths with no recognisable ordinal.
///
/// # Panics
///
/// Panics if the hardcoded level pattern is invalid (compile-time invariant).
pub fn to_notation<I: DirectoryIndex>(tree: &DocumentTree<I>, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(tree.root()).ok()?;
    let mut names = relative.components().filter_map(|c| return match c {
        Component::Normal(name) => name.to_str(),
        _ => None,
    });

    return match tree.area_of(names.next()?)? {
        Area::Back => appendix_coordinate(names).notation(),
        Area::Body => body_coordinate(names).notation(),
        Area::Front => None,
    };
}

/// Fold the path components below the body root into a coordinate.
fn body_coordinate<'a>(names: impl Iterator<Item = &'a str>) -> BodyCoordinate {
    let mut coord = BodyCoordinate::default();
    for name in names {
        match level_token(name) {
            Some(("part", ordinal)) => coord.part = numeric(ordinal).unwrap_or(coord.part),
            Some(("ch", ordinal)) => {
                coord.chapter = numeric(ordinal).or_else(|| return roman::from_roman(ordinal)).unwrap_or(coord.chapter);
            },
            Some(("sec", ordinal)) => coord.section = numeric(ordinal).unwrap_or(coord.section),
            _ => {},
        }
    }
    return coord;
}

/// Same for the back matter; `sec` tokens set the appendix section.
fn appendix_coordinate<'a>(names: impl Iterator<Item = &'a str>) -> AppendixCoordinate {
    let mut coord = AppendixCoordinate::default();
    for name in names {
        match level_token(name) {
            Some(("app", ordinal)) => coord.appendix = numeric(ordinal).unwrap_or(coord.appendix),
            Some(("sec", ordinal)) => coord.section = numeric(ordinal).unwrap_or(coord.section),
            _ => {},
        }
    }
    return coord;
}

/// Split `ch03-intro` into `("ch", "03")`.
fn level_token(name: &str) -> Option<(&str, &str)> {
    let caps = LEVEL_TOKEN.captures(name)?;
    return Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()));
}

/// Decimal ordinals only; roman spellings return `None` here.
fn numeric(ordinal: &str) -> Option<u32> {
    return ordinal.parse().ok();
}
