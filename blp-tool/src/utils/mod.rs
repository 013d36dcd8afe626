//! Shared utilities for the blp-tool CLI

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
