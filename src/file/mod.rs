//! Low-level binary reading primitives.
//!
//! - [`io`] - Bounds-checked little-endian readers for primitive types
//! - [`parser`] - A cursor-based [`parser::Parser`] built on top of [`io`]
//!
//! The runtime data blob arrives fully loaded in memory, so unlike a PE loader there is no
//! file backend here: everything operates on borrowed byte slices.

pub mod io;
pub mod parser;
