//! # pont-core
//!
//! Core types and error definitions for captain-pont.
//!
//! Every other crate in the workspace reports failures through
//! [`errors::Error`] and validates pre- and postconditions with the
//! [`ensure!`] and [`ensure_post!`] macros defined here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed integer used for day offsets and caller-facing counts.
pub type Integer = i32;

/// Calendar year as stored inside a date.
pub type Year = u16;

/// Alias used for counts of days and collection sizes.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
