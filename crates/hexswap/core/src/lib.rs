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

//! Hexswap Core Library
//!
//! Converts space-separated hexdump groups (`aabb ccdd ...`) into
//! byte-swapped, comma-separated `0x` literals wrapped at eight per line.

pub mod error;
pub mod group;
pub mod lines;
pub mod reformatter;

pub use error::{ReformatError, Result};
pub use group::{ByteLiteral, Group, clamped_slice, split_groups};
pub use lines::Lines;
pub use reformatter::{
    HexdumpReformatter, LITERALS_PER_GROUP, LITERALS_PER_LINE, SEPARATOR, Summary, reformat, reformat_file, reformat_str,
};
