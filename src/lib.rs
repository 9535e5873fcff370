//! commit-credits - who really wrote a commit
//!
//! Recovers the contributors of a git commit from message conventions and,
//! for commits imported from Subversion, from the changelog entries they
//! added, then resolves them to canonical names.
//!
//! This library provides:
//! - [`config`]: Configuration file loading
//! - [`credit`]: Name extraction and resolution pipeline
//! - [`git`]: git command execution and parsing
//! - [`model`]: Domain models
//! - [`names`]: Special-case and alias lookup services

pub mod config;
pub mod credit;
pub mod git;
pub mod model;
pub mod names;
