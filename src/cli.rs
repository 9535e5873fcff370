use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Revisions to credit
    #[arg(default_value = "HEAD")]
    pub revisions: Vec<String>,

    /// Repository to read (defaults to the current directory)
    #[arg(short = 'C', long = "repo")]
    pub repo: Option<PathBuf>,

    /// Name table configuration file (TOML), else $COMMIT_CREDITS_CONFIG
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Credit the whole history reachable from the revisions
    #[arg(short, long)]
    pub walk: bool,
}
