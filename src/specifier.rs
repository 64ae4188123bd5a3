//! Classification of raw target strings into addressing schemes.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{AddressScheme, AppendixCoordinate, BodyCoordinate};

/// One to three dot-separated ASCII digit groups.
static BODY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^[0-9]+(\.[0-9]+){0,2}$").expect("valid regex"));

/// One or two groups, as found after the `A.` prefix.
static APPENDIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid regex"));

/// Classify a specifier. Malformed coordinates degrade to `NotNumeric`
/// instead of failing, so the caller can still try them as names.
///
/// # Panics
///
/// Panics if the hardcoded patterns are invalid (compile-time invariant).
pub fn classify(specifier: &str) -> AddressScheme {
    if let Some(rest) = strip_appendix_prefix(specifier) {
        if !APPENDIX_PATTERN.is_match(rest) {
            return AddressScheme::NotNumeric;
        }
        let Some([appendix, section]) = parse_components::<2>(rest) else {
            return AddressScheme::NotNumeric;
        };
        return AddressScheme::Appendix(AppendixCoordinate { appendix, section });
    }

    if !BODY_PATTERN.is_match(specifier) {
        return AddressScheme::NotNumeric;
    }
    let Some([part, chapter, section]) = parse_components::<3>(specifier) else {
        return AddressScheme::NotNumeric;
    };
    return AddressScheme::Body(BodyCoordinate { part, chapter, section });
}

/// Strip a case-insensitive `A.` prefix.
fn strip_appendix_prefix(specifier: &str) -> Option<&str> {
    return specifier
        .strip_prefix("A.")
        .or_else(|| return specifier.strip_prefix("a."));
}

/// Parse dot-separated decimals into a zero-padded array.
/// `None` if there are more than `N` groups or a group overflows `u32`.
fn parse_components<const N: usize>(text: &str) -> Option<[u32; N]> {
    if text.split('.').count() > N {
        return None;
    }
    let mut out = [0_u32; N];
    for (slot, group) in out.iter_mut().zip(text.split('.')) {
        *slot = group.parse().ok()?;
    }
    return Some(out);
}
