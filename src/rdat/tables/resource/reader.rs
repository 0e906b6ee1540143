use crate::{
    rdat::{
        tables::{ResourceInfoRaw, StringTable},
        ResourceClass, ResourceKind,
    },
    Result,
};

/// A non-owning view on one resource record.
///
/// Created on demand by [`crate::rdat::tables::ResourceTable`] and bound to the string table
/// its name resolves against. Views are cheap to copy and never stored by the tables.
#[derive(Clone, Copy, Debug)]
pub struct ResourceReader<'a> {
    info: ResourceInfoRaw,
    strings: StringTable<'a>,
}

impl<'a> ResourceReader<'a> {
    /// Bind a decoded record to the string table used for its name
    #[must_use]
    pub fn new(info: ResourceInfoRaw, strings: StringTable<'a>) -> Self {
        ResourceReader { info, strings }
    }

    /// The underlying raw record
    #[must_use]
    pub fn raw(&self) -> &ResourceInfoRaw {
        &self.info
    }

    /// Flat index of the record inside the resource table
    #[must_use]
    pub fn index(&self) -> u32 {
        self.info.index
    }

    /// The resource class, `None` for unknown tags
    #[must_use]
    pub fn resource_class(&self) -> Option<ResourceClass> {
        self.info.resource_class()
    }

    /// The resource kind, `None` for unknown tags
    #[must_use]
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        self.info.resource_kind()
    }

    /// ID of the resource within its class
    #[must_use]
    pub fn id(&self) -> u32 {
        self.info.id
    }

    /// Register space
    #[must_use]
    pub fn space(&self) -> u32 {
        self.info.space
    }

    /// First register of the bind range
    #[must_use]
    pub fn lower_bound(&self) -> u32 {
        self.info.lower_bound
    }

    /// Last register of the bind range
    #[must_use]
    pub fn upper_bound(&self) -> u32 {
        self.info.upper_bound
    }

    /// Resource flags
    #[must_use]
    pub fn flags(&self) -> u32 {
        self.info.flags
    }

    /// Resolve the resource name.
    ///
    /// # Errors
    /// Returns an error if the name offset is not a valid string of the string table.
    pub fn name(&self) -> Result<&'a str> {
        self.strings.get(self.info.name)
    }
}
