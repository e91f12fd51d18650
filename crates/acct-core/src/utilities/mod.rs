//! Miscellaneous utilities.

/// Fixed-width parsers for the ASCII date formats.
pub mod data_parsers;
