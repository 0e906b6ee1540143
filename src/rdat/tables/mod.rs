//! The four sub-tables of a runtime data blob.
//!
//! Each reader is a zero-copy view over its region of the container:
//!
//! - [`StringTable`] - nul-terminated UTF-8 strings addressed by byte offset
//! - [`IndexTable`] - variable-length `u32` rows addressed by word offset
//! - [`ResourceTable`] - fixed-stride resource records, partitioned by class
//! - [`FunctionTable`] - fixed-stride function records
//!
//! The readers do not know about each other. Cross-table references are resolved by the view
//! objects ([`ResourceReader`], [`FunctionReader`]), which receive the tables they need when
//! they are created.

mod function;
mod index;
mod resource;
mod strings;
mod types;

pub use function::{
    DependencyIterator, FunctionInfoRaw, FunctionReader, FunctionResourceIterator, FunctionTable,
};
pub use index::{IndexRow, IndexRowIterator, IndexTable, INDEX_WORD_SIZE};
pub use resource::{ClassRange, ResourceInfoRaw, ResourceReader, ResourceTable};
pub use strings::{StringTable, StringTableIterator};
pub use types::{RecordIterator, RecordTable, RowReadable};
