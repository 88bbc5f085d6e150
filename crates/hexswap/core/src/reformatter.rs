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

//! Streaming hexdump reformatter.
//!
//! Turns lines such as `0011 2233` into byte-swapped C-style literals:
//!
//! ```text
//! 0x11, 0x00, 0x33, 0x22, 
//! ```
//!
//! Every group is followed by `, `, including the last one on an output line.
//! A line break is written before a group once eight literals are on the
//! current output line, and the column count carries across input lines.
//! One final newline closes the output.

use crate::error::{ReformatError, Result};
use crate::group::{Group, split_groups};
use crate::lines::Lines;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Literals written per output line before wrapping.
pub const LITERALS_PER_LINE: usize = 8;

/// Literals produced by every group.
pub const LITERALS_PER_GROUP: usize = 2;

/// Written after every group.
pub const SEPARATOR: &str = ", ";

/// Counters collected over one reformatting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Input lines consumed.
    pub lines: usize,
    /// Groups rendered, including empty and malformed ones.
    pub groups: usize,
    /// Byte literals written.
    pub literals: usize,
    /// Newlines written, the closing one included.
    pub output_lines: usize,
    /// Groups that were not exactly four hex digits.
    pub malformed_groups: usize,
}

/// Writes reformatted groups to `W` as they are pushed.
pub struct HexdumpReformatter<W: Write> {
    sink: W,
    column: usize,
    summary: Summary,
}

impl<W: Write> HexdumpReformatter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            column: 0,
            summary: Summary::default(),
        }
    }

    /// Number of literals on the current output line.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Reformat every group of one input line.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.summary.lines += 1;
        for group in split_groups(line) {
            self.push_group(group)?;
        }
        Ok(())
    }

    /// Reformat a single group, wrapping first if the current line is full.
    pub fn push_group(&mut self, group: Group<'_>) -> Result<()> {
        if self.column == LITERALS_PER_LINE {
            self.sink.write_all(b"\n").map_err(ReformatError::Write)?;
            self.summary.output_lines += 1;
            self.column = 0;
        }

        if !group.is_well_formed() {
            trace!(group = group.as_str(), "Malformed group");
            self.summary.malformed_groups += 1;
        }

        write!(self.sink, "{group}{SEPARATOR}").map_err(ReformatError::Write)?;

        self.column += LITERALS_PER_GROUP;
        self.summary.groups += 1;
        self.summary.literals += LITERALS_PER_GROUP;
        Ok(())
    }

    /// Write the closing newline, flush, and hand back the sink.
    pub fn finish(mut self) -> Result<(W, Summary)> {
        self.sink.write_all(b"\n").map_err(ReformatError::Write)?;
        self.summary.output_lines += 1;
        self.sink.flush().map_err(ReformatError::Write)?;
        Ok((self.sink, self.summary))
    }
}

/// Reformat every line of `reader` into `sink`.
pub fn reformat<R: BufRead, W: Write>(reader: R, sink: W) -> Result<Summary> {
    let mut formatter = HexdumpReformatter::new(sink);

    for line in Lines::new(reader) {
        formatter.push_line(&line?)?;
    }

    let (_, summary) = formatter.finish()?;
    debug!(
        lines = summary.lines,
        groups = summary.groups,
        malformed = summary.malformed_groups,
        "Reformatted hexdump"
    );
    Ok(summary)
}

/// Reformat the file at `path` into `sink`.
///
/// The file is closed when this returns, on success or failure.
pub fn reformat_file<W: Write>(path: impl AsRef<Path>, sink: W) -> Result<Summary> {
    let path = path.as_ref();
    debug!("Opening hexdump {}", path.display());

    let file = File::open(path).map_err(|source| ReformatError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    reformat(BufReader::new(file), sink)
}

/// Reformat an in-memory hexdump.
pub fn reformat_str(input: &str) -> String {
    let mut out = Vec::new();
    reformat(input.as_bytes(), &mut out).expect("reading a str and writing a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}
