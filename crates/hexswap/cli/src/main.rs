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

//! Hexswap CLI Tool
//!
//! Reformats a hexdump file into byte-swapped `0x` literals on standard output.

mod config;

use anyhow::Context;
use clap::Parser;
use config::Config;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hexswap")]
#[command(about = "Hexswap - byte-swap hexdump groups into 0x literals")]
#[command(version = "0.1.0")]
struct Cli {
    /// Hexdump file to read (defaults to $HEXSWAP_INPUT, then hexdump.txt)
    input: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the converted text
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env(cli.input);

    if let Err(e) = run(&config) {
        error!("Conversion failed: {:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let sink = BufWriter::new(stdout.lock());

    let summary = hexswap_core::reformat_file(&config.input, sink)
        .with_context(|| format!("reformatting {}", config.input.display()))?;

    info!(
        "Converted {} groups from {} lines into {} output lines",
        summary.groups, summary.lines, summary.output_lines
    );
    if summary.malformed_groups > 0 {
        info!("{} groups were not four hex digits", summary.malformed_groups);
    }
    Ok(())
}
