// Hexswap
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Input groups and the byte literals derived from them.
//!
//! A group is one space-delimited token of a hexdump line, normally four hex
//! digits such as `aabb`. Each group yields two [`ByteLiteral`]s, emitted in
//! swapped order (`0xBB, 0xAA`). Short or empty groups are not rejected; their
//! halves are simply shorter, so `ab` renders as `0x, 0xAB`.

use std::fmt::{self, Write};

/// Number of characters that make up one byte of a group.
const BYTE_WIDTH: usize = 2;

/// Returns the characters of `s` in `[start, end)`, clamped to its length.
///
/// Indices count characters, not bytes. Out-of-range bounds shrink the
/// result instead of panicking, and an empty string is returned when `start`
/// lies at or past the end of `s`.
pub fn clamped_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }

    let mut boundaries = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let Some(from) = boundaries.nth(start) else {
        return "";
    };
    let to = boundaries.nth(end - start - 1).unwrap_or(s.len());

    &s[from..to]
}

/// Splits one input line into groups.
///
/// The line is trimmed and then split on every single space, so runs of
/// spaces produce empty groups and a blank line produces exactly one.
pub fn split_groups(line: &str) -> impl Iterator<Item = Group<'_>> {
    line.trim_matches(is_line_padding).split(' ').map(Group::new)
}

/// Whitespace stripped from both ends of a line.
///
/// Includes the ASCII file, group, record and unit separators (`\x1c`..=`\x1f`)
/// on top of Unicode whitespace.
fn is_line_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// One space-delimited token of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    token: &'a str,
}

impl<'a> Group<'a> {
    pub fn new(token: &'a str) -> Self {
        Self { token }
    }

    pub fn as_str(&self) -> &'a str {
        self.token
    }

    /// First byte of the group (characters 0..2).
    pub fn high(&self) -> ByteLiteral<'a> {
        ByteLiteral(clamped_slice(self.token, 0, BYTE_WIDTH))
    }

    /// Second byte of the group (characters 2..4).
    pub fn low(&self) -> ByteLiteral<'a> {
        ByteLiteral(clamped_slice(self.token, BYTE_WIDTH, 2 * BYTE_WIDTH))
    }

    /// The two literals in output order: low byte first.
    pub fn literals(&self) -> [ByteLiteral<'a>; 2] {
        [self.low(), self.high()]
    }

    /// Whether the group is exactly four ASCII hex digits.
    ///
    /// Only used for diagnostics; malformed groups are still rendered.
    pub fn is_well_formed(&self) -> bool {
        self.token.len() == 2 * BYTE_WIDTH && self.token.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for Group<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [low, high] = self.literals();
        write!(f, "{low}, {high}")
    }
}

/// A `0x`-prefixed, upper-cased rendering of one half of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteLiteral<'a>(&'a str);

impl<'a> ByteLiteral<'a> {
    /// The raw digits as they appeared in the input, before upper-casing.
    pub fn digits(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for ByteLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for c in self.0.chars().flat_map(char::to_uppercase) {
            f.write_char(c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abcd", 0, 2, "ab"; "leading pair")]
    #[test_case("abcd", 2, 4, "cd"; "trailing pair")]
    #[test_case("abc", 2, 4, "c"; "truncated end")]
    #[test_case("ab", 2, 4, ""; "start at end")]
    #[test_case("a", 2, 4, ""; "start past end")]
    #[test_case("", 0, 2, ""; "empty input")]
    #[test_case("abcd", 3, 3, ""; "empty range")]
    #[test_case("äöüß", 1, 3, "öü"; "counts characters not bytes")]
    fn test_clamped_slice(input: &str, start: usize, end: usize, expected: &str) {
        assert_eq!(clamped_slice(input, start, end), expected);
    }

    #[test]
    fn test_group_halves() {
        let group = Group::new("aabb");
        assert_eq!(group.high().digits(), "aa");
        assert_eq!(group.low().digits(), "bb");
        assert_eq!(group.to_string(), "0xBB, 0xAA");
    }

    #[test_case("ab", "0x, 0xAB"; "two characters")]
    #[test_case("abc", "0xC, 0xAB"; "three characters")]
    #[test_case("a", "0x, 0xA"; "one character")]
    #[test_case("", "0x, 0x"; "empty token")]
    #[test_case("001122", "0x11, 0x00"; "extra characters ignored")]
    fn test_short_and_long_groups(token: &str, expected: &str) {
        assert_eq!(Group::new(token).to_string(), expected);
    }

    #[test]
    fn test_literal_upper_cases_digits() {
        let [low, high] = Group::new("fe0a").literals();
        assert_eq!(low.to_string(), "0x0A");
        assert_eq!(high.to_string(), "0xFE");
    }

    #[test]
    fn test_well_formed() {
        assert!(Group::new("00fF").is_well_formed());
        assert!(!Group::new("00f").is_well_formed());
        assert!(!Group::new("zz00").is_well_formed());
        assert!(!Group::new("").is_well_formed());
    }

    #[test]
    fn test_split_groups_keeps_empty_tokens() {
        let groups: Vec<_> = split_groups("  aabb  ccdd\r").map(|g| g.as_str()).collect();
        assert_eq!(groups, vec!["aabb", "", "ccdd"]);
    }

    #[test]
    fn test_split_strips_separator_controls() {
        let groups: Vec<_> = split_groups("\x1e aabb ccdd \x1f").map(|g| g.as_str()).collect();
        assert_eq!(groups, vec!["aabb", "ccdd"]);
    }

    #[test]
    fn test_split_blank_line_yields_one_empty_group() {
        let groups: Vec<_> = split_groups("   ").collect();
        assert_eq!(groups, vec![Group::new("")]);
    }
}
