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

//! Input resolution for the hexswap binary.

use std::env;
use std::path::PathBuf;

/// Input read when neither the command line nor the environment names one.
pub const DEFAULT_INPUT: &str = "hexdump.txt";

/// Environment variable overriding the default input path.
pub const INPUT_ENV_VAR: &str = "HEXSWAP_INPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hexdump file to reformat
    pub input: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

impl Config {
    /// Command line beats environment, environment beats the default.
    pub fn resolve(cli_input: Option<PathBuf>, env_input: Option<String>) -> Self {
        if let Some(input) = cli_input {
            Self { input }
        } else if let Some(input) = env_input.filter(|value| !value.is_empty()) {
            Self { input: PathBuf::from(input) }
        } else {
            Self::default()
        }
    }

    pub fn from_env(cli_input: Option<PathBuf>) -> Self {
        Self::resolve(cli_input, env::var(INPUT_ENV_VAR).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        assert_eq!(Config::resolve(None, None).input, PathBuf::from("hexdump.txt"));
    }

    #[test]
    fn test_env_overrides_default() {
        let config = Config::resolve(None, Some("/tmp/dump.txt".to_string()));
        assert_eq!(config.input, PathBuf::from("/tmp/dump.txt"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        assert_eq!(Config::resolve(None, Some(String::new())), Config::default());
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = Config::resolve(Some(PathBuf::from("cli.txt")), Some("env.txt".to_string()));
        assert_eq!(config.input, PathBuf::from("cli.txt"));
    }
}
