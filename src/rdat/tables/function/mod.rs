//! The `Function` table: shader function records and their views.
//!
//! - [`FunctionInfoRaw`] - one decoded 44-byte record
//! - [`FunctionTable`] - the record array
//! - [`FunctionReader`] - the on-demand view on a single record, resolving names, resource
//!   lists and dependency lists through a [`crate::rdat::RuntimeDataContext`]

mod raw;
mod reader;
mod table;

pub use raw::FunctionInfoRaw;
pub use reader::{DependencyIterator, FunctionReader, FunctionResourceIterator};
pub use table::FunctionTable;
