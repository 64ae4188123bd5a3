//! Lowercase roman numerals for the first ten chapters.

/// Index `n - 1` holds the numeral for `n`.
const NUMERALS: [&str; 10] = ["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x"];

/// Roman spelling of `n`, only defined for 1 through 10.
pub fn to_roman(n: u32) -> Option<&'static str> {
    let idx = usize::try_from(n.checked_sub(1)?).ok()?;
    return NUMERALS.get(idx).copied();
}

/// Inverse of [`to_roman`]. Case-sensitive: chapter prefixes are lowercase.
pub fn from_roman(numeral: &str) -> Option<u32> {
    let idx = NUMERALS.iter().position(|n| return *n == numeral)?;
    return u32::try_from(idx).ok().map(|i| return i.saturating_add(1));
}
