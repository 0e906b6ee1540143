//! Factories for crafting runtime data containers in unit tests.
//!
//! Records are produced as raw little-endian bytes, exactly as a compiler would emit them,
//! and [`RdatBuilder`] lays out the table directory around them. Nothing here goes through the
//! decoder, so the tests exercise it against independently produced input.


pub use builder::RdatBuilder;
pub use records::{function_record, resource_record, words, ABSENT};
