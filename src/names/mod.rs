//! Name lookup services
//!
//! The curated data behind canonicalization, injected into the pipeline as
//! two read-only services so the extraction code holds no global tables.

mod table;

pub use table::NameTable;

/// Curated overrides for raw candidates
///
/// A rule may correct a candidate, expand it into several names
/// (`"Alice and Bob"`), or suppress it by returning nothing. Must be total:
/// unknown candidates come back as-is rather than failing.
pub trait SpecialCaseRules {
    fn handle_special_case(&self, name: &str, author: &str) -> Vec<String>;
}

/// Alias and misspelling resolution
///
/// Unknown names map to themselves.
pub trait CanonicalNames {
    fn canonical_name_for(&self, name: &str) -> String;
}
