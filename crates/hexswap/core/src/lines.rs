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

//! Line splitting for hexdump input.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line, so dumps saved with classic
//! Mac line endings are read line by line instead of as one long line.

use crate::error::{ReformatError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the lines of a reader, terminators removed.
pub struct Lines<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    line: usize,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: 0,
            done: false,
        }
    }

    /// Read up to the next `\n` and queue every line it contains.
    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = Vec::new();
        if self.reader.read_until(b'\n', &mut chunk)? == 0 {
            self.done = true;
            return Ok(());
        }

        let ended_with_newline = chunk.last() == Some(&b'\n');
        if ended_with_newline {
            chunk.pop();
            // `\r\n` is a single terminator
            if chunk.last() == Some(&b'\r') {
                chunk.pop();
            }
        }

        let mut pieces: Vec<Vec<u8>> = chunk.split(|&b| b == b'\r').map(<[u8]>::to_vec).collect();
        // A trailing `\r` at end of input closes the last line; nothing follows it.
        if !ended_with_newline && chunk.last() == Some(&b'\r') {
            pieces.pop();
        }

        self.pending.extend(pieces);
        Ok(())
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() && !self.done {
            if let Err(source) = self.fill() {
                self.done = true;
                return Some(Err(ReformatError::Read {
                    line: self.line + 1,
                    source,
                }));
            }
        }

        let bytes = self.pending.pop_front()?;
        self.line += 1;
        Some(String::from_utf8(bytes).map_err(|e| ReformatError::Read {
            line: self.line,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn collect(input: &str) -> Vec<String> {
        Lines::new(input.as_bytes()).map(|line| line.unwrap()).collect()
    }

    #[test_case("", &[]; "empty input")]
    #[test_case("aabb", &["aabb"]; "no terminator")]
    #[test_case("aabb\nccdd\n", &["aabb", "ccdd"]; "unix")]
    #[test_case("aabb\r\nccdd\r\n", &["aabb", "ccdd"]; "windows")]
    #[test_case("aabb\rccdd\r", &["aabb", "ccdd"]; "classic mac")]
    #[test_case("aabb\rccdd\neeff\r\n", &["aabb", "ccdd", "eeff"]; "mixed")]
    #[test_case("\n", &[""]; "single blank line")]
    #[test_case("\r", &[""]; "single carriage return")]
    #[test_case("aabb\r\r\n", &["aabb", ""]; "carriage return before crlf")]
    #[test_case("aabb\n\nccdd", &["aabb", "", "ccdd"]; "blank line in the middle")]
    fn test_line_terminators(input: &str, expected: &[&str]) {
        assert_eq!(collect(input), expected);
    }

    #[test]
    fn test_invalid_utf8_counts_lines_split_on_carriage_return() {
        let input: &[u8] = b"aabb\rccdd\r\xff\n";
        let results: Vec<_> = Lines::new(input).collect();

        assert_eq!(results.len(), 3);
        assert!(matches!(results[2], Err(ReformatError::Read { line: 3, .. })));
    }
}
