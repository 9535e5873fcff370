//! Data models for commit-credits
//!
//! This module contains backend-independent data structures representing
//! the commits whose contributors are extracted.

mod commit;

pub use commit::Commit;
