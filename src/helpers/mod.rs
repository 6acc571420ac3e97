//! Helper functions shared by the loader and the CLI output

mod date;

pub use date::*;
