//! git output parser
//!
//! Parses the output from git commands into structured data.

mod log;

#[cfg(test)]
mod tests;

/// Parser for git command output
pub struct Parser;
