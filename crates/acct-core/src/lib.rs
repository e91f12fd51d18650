//! # acct-core
//!
//! Core error definitions and parsing helpers for acctperiods.
//!
//! This crate holds what every other crate in the workspace shares: the
//! error enum, the `Result` alias, the `ensure!` / `fail!` macros, and the
//! fixed-width readers for the ASCII date formats.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
