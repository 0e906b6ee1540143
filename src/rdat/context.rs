use crate::rdat::tables::{FunctionTable, IndexTable, ResourceTable, StringTable};

/// The set of table readers view objects resolve cross-table references against.
///
/// All readers are zero-copy and `Copy`, so the context is passed by value into every view it
/// produces. Tables missing from the container are represented by empty readers; any
/// reference into them fails with [`crate::Error::InvalidReference`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeDataContext<'a> {
    /// The string table
    pub strings: StringTable<'a>,
    /// The index table
    pub index: IndexTable<'a>,
    /// The resource table
    pub resources: ResourceTable<'a>,
    /// The function table
    pub functions: FunctionTable<'a>,
}
