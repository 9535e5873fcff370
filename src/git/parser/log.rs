//! Log output parser (git log)

use super::super::GitError;
use super::super::template::{FIELD_SEPARATOR, RECORD_SEPARATOR};
use crate::model::Commit;

use super::Parser;

impl Parser {
    /// Parse `git log` output into a list of Commits
    ///
    /// Records end with 0x1E. git prints a newline after each record, so
    /// every record but the first starts with one.
    pub fn parse_log(output: &str) -> Result<Vec<Commit>, GitError> {
        let mut commits = Vec::new();

        for record in output.split(RECORD_SEPARATOR) {
            let record = record.trim_start_matches(['\n', '\r']);
            if record.trim().is_empty() {
                continue;
            }

            commits.push(Self::parse_log_record(record)?);
        }

        Ok(commits)
    }

    /// Parse a single log record (id, author, message)
    ///
    /// The message is last and may contain anything, so it takes the rest
    /// of the record.
    pub(super) fn parse_log_record(record: &str) -> Result<Commit, GitError> {
        let fields: Vec<&str> = record.splitn(3, FIELD_SEPARATOR).collect();

        if fields.len() < 3 {
            return Err(GitError::ParseError(format!(
                "Expected 3 fields, got {}: {:?}",
                fields.len(),
                fields
            )));
        }

        let id = fields[0].trim();
        if id.is_empty() {
            return Err(GitError::ParseError(format!(
                "Missing commit ID in record: {:?}",
                record
            )));
        }

        Ok(Commit::new(id, fields[2].trim_end(), fields[1]))
    }
}
