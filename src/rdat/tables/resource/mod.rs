//! The `Resource` table: resource binding records and their class partition.
//!
//! - [`ResourceInfoRaw`] - one decoded 32-byte record
//! - [`ResourceTable`] - the record array, partitioned by class
//! - [`ResourceReader`] - the on-demand view on a single record

mod raw;
mod reader;
mod table;

pub use raw::ResourceInfoRaw;
pub use reader::ResourceReader;
pub use table::{ClassRange, ResourceTable};
