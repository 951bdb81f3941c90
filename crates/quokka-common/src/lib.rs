//! Common utilities for the Quokka HTML parser.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - deduplicated, colored terminal output for recoverable
//!   parsing problems
//! - **Source Loading** - reading HTML input for the CLI

pub mod source;
pub mod warning;
