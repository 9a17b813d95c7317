//! # Identifier Formatting
//!
//! Identifiers are typed in all sorts of ways: `A123456789`, `a12 345 6789`,
//! or pasted back from a previous listing as `A12 3456 789`. Before storing,
//! every identifier is brought into one **canonical form**:
//!
//! 1. **Clean**: drop every whitespace character, keep the rest in order.
//! 2. **Group**: once the cleaned value is at least [`GROUPING_MIN_LEN`] characters
//!    long, split it into groups of 3, 4 and the remainder, separated by one space.
//!    Shorter values are returned cleaned but ungrouped.
//!
//! ```text
//! "A123456789"    -> "A12 3456 789"
//! "P051 234 567X" -> "P05 1234 567X"
//! "12345"         -> "12345"
//! ```
//!
//! Formatting is purely structural: no character class is checked. Because the
//! separators are spaces and step 1 removes spaces, formatting a canonical value
//! again yields the same value.

/// Cleaned length from which separators are inserted.
pub const GROUPING_MIN_LEN: usize = 10;

const FIRST_GROUP: usize = 3;
const SECOND_GROUP_END: usize = 7;

/// Removes all whitespace, preserving the order of the remaining characters.
pub fn clean_identifier(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Number of characters left once whitespace is removed.
pub fn identifier_len(raw: &str) -> usize {
    raw.chars().filter(|c| !c.is_whitespace()).count()
}

/// Produces the canonical display form of an identifier.
pub fn format_identifier(raw: &str) -> String {
    let cleaned: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() < GROUPING_MIN_LEN {
        return cleaned.into_iter().collect();
    }

    let mut out = String::with_capacity(cleaned.len() + 2);
    out.extend(&cleaned[..FIRST_GROUP]);
    out.push(' ');
    out.extend(&cleaned[FIRST_GROUP..SECOND_GROUP_END]);
    out.push(' ');
    out.extend(&cleaned[SECOND_GROUP_END..]);
    out
}
