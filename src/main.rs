//! commit-credits
//!
//! Binary entry point: prints the contributors of each requested commit.

use std::io::{self, Write};

use clap::Parser;

use commit_credits::config::Config;
use commit_credits::credit::Resolver;
use commit_credits::git::GitExecutor;
use commit_credits::git::constants::SHORT_ID_LEN;
use commit_credits::names::NameTable;

use crate::cli::Cli;

mod cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    run(Cli::parse())
}

/// Resolve and print one `<id>\t<names>` line per commit.
fn run(cli: Cli) -> color_eyre::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let table = NameTable::from_config(&config.names)?;
    let executor = cli
        .repo
        .map(GitExecutor::with_repo_path)
        .unwrap_or_default();

    let revisions: Vec<&str> = cli.revisions.iter().map(String::as_str).collect();
    let commits = executor.commits(&revisions, cli.walk)?;
    let resolver = Resolver::new(&executor, &table, &table);

    let mut out = io::stdout().lock();
    for commit in &commits {
        let names = resolver.resolve(commit)?;
        let id = commit.id().get(..SHORT_ID_LEN).unwrap_or(commit.id());
        writeln!(out, "{}\t{}", id, names.join(", "))?;
    }

    Ok(())
}
