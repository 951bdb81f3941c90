//! Tree construction module.
//!
//! Folds the flat token stream into an ordered forest of owned nodes.

/// The recursive-descent tree builder.
pub mod core;

pub use self::core::{TreeBuilder, build_forest, print_forest};
