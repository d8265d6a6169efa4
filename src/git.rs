//! Git operations and repository analysis.

pub mod analyzer;
pub mod commit;

pub use analyzer::RepoAnalyzer;
pub use commit::CommitRecord;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;
