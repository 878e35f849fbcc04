//! Shared helpers for writing configured state back to the data stack.

pub mod utils;
