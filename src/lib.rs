//! # git-reporter
//!
//! AI-powered git commit history analyzer and report generator.
//!
//! Walks commit history across one or more configured repositories, filters
//! commits by date window and author, and asks a hosted LLM provider to
//! summarize them into a human-readable work report.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ai;
pub mod cli;
pub mod config;
pub mod git;
pub mod report;

pub use crate::cli::Cli;

/// The current version of git-reporter.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
