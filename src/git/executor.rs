//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use super::GitError;
use super::constants::{self, commands, errors, flags};
use super::parser::Parser;
use super::template::Templates;
use crate::credit::{CreditError, DiffProvider};
use crate::model::Commit;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    ///
    /// Paging is always disabled and messages are forced to the C locale so
    /// error output can be matched.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        // Add repository path if specified
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_PAGER);
        cmd.args(args);
        cmd.env("LC_ALL", "C");

        debug!("running git {:?}", args);
        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git log` for the given revisions
    ///
    /// Without `walk`, only the named commits are listed (`--no-walk`);
    /// with it, ranges such as `v1.0..v2.0` expand to their history.
    pub fn log_raw(&self, revisions: &[&str], walk: bool) -> Result<String, GitError> {
        self.run(&log_args(revisions, walk))
    }

    /// Run `git log` for a single commit
    pub fn show_commit_raw(&self, revision: &str) -> Result<String, GitError> {
        self.run(&[
            commands::LOG,
            Templates::log(),
            flags::SINGLE,
            revision,
            flags::END_OF_REVISIONS,
        ])
    }

    /// Run `git show` for the patch of a commit against its parent
    pub fn diff_raw(&self, commit_id: &str) -> Result<String, GitError> {
        self.run(&diff_args(commit_id))
    }

    /// Read the commits named by `revisions`
    pub fn commits(&self, revisions: &[&str], walk: bool) -> Result<Vec<Commit>, GitError> {
        Parser::parse_log(&self.log_raw(revisions, walk)?)
    }

    /// Read a single commit
    pub fn commit(&self, revision: &str) -> Result<Commit, GitError> {
        Parser::parse_log(&self.show_commit_raw(revision)?)?
            .into_iter()
            .next()
            .ok_or_else(|| GitError::ParseError(format!("no commit found for {revision}")))
    }
}

fn log_args<'a>(revisions: &[&'a str], walk: bool) -> Vec<&'a str> {
    let mut args = vec![commands::LOG, Templates::log()];
    if !walk {
        args.push(flags::NO_WALK);
    }
    args.extend_from_slice(revisions);
    args.push(flags::END_OF_REVISIONS);
    args
}

/// Patch only: no header, no color, no external diff driver
fn diff_args(commit_id: &str) -> [&str; 7] {
    [
        commands::SHOW,
        flags::EMPTY_FORMAT,
        flags::PATCH,
        flags::NO_COLOR,
        flags::NO_EXT_DIFF,
        commit_id,
        flags::END_OF_REVISIONS,
    ]
}

impl DiffProvider for GitExecutor {
    fn fetch_diff(&self, commit_id: &str) -> Result<String, CreditError> {
        self.diff_raw(commit_id)
            .map_err(|e| CreditError::DiffUnavailable {
                commit_id: commit_id.to_string(),
                source: Box::new(e),
            })
    }
}
