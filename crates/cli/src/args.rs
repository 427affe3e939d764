use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version)]
/// Scrape the ibay.com.mv category tree into JSON files
pub struct Cli {
    /// Settings file (TOML). Defaults are used when omitted
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    /// Directory the JSON files are written to
    #[arg(long, short = 'o', global = true)]
    pub output_dir: Option<PathBuf>,
    /// Attempts per category listing before giving up on it
    #[arg(long, short = 'm', global = true)]
    pub max_attempts: Option<u32>,
    /// Log filter, e.g. `info` or `ibay_core=debug`. Overrides `RUST_LOG`
    #[arg(long, short = 'l', global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the whole tree and write the raw and normalized files (default)
    Fetch,
    /// Normalize an existing raw tree file
    Normalize {
        /// Raw tree written by `fetch`
        input: PathBuf,
        /// Where to write the result. Defaults to the normalized file name next to the input
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a settings file filled with the defaults
    InitConfig {
        path: PathBuf,
    },
}
