use crate::{
    file::io::read_le_at,
    rdat::{tables::RowReadable, ResourceClass, ResourceKind, RuntimeDataPartType, StringRef},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One resource binding record of the `Resource` table. 8 x `u32`
pub struct ResourceInfoRaw {
    /// Zero-based record index within the resource table
    pub index: u32,
    /// Resource class tag, see [`ResourceClass`]
    pub class: u32,
    /// Resource kind tag, see [`ResourceKind`]
    pub kind: u32,
    /// ID, unique within the resource class
    pub id: u32,
    /// Register space
    pub space: u32,
    /// First register of the bind range
    pub lower_bound: u32,
    /// Last register of the bind range
    pub upper_bound: u32,
    /// Resource name, an offset into the string table
    pub name: StringRef,
    /// Resource flags, carried through as-is
    pub flags: u32,
}

impl ResourceInfoRaw {
    /// The typed resource class, `None` for tags this library does not know
    #[must_use]
    pub fn resource_class(&self) -> Option<ResourceClass> {
        ResourceClass::from_repr(self.class)
    }

    /// The typed resource kind, `None` for tags this library does not know
    #[must_use]
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        ResourceKind::from_repr(self.kind)
    }
}

impl RowReadable for ResourceInfoRaw {
    const TABLE: RuntimeDataPartType = RuntimeDataPartType::Resource;

    #[rustfmt::skip]
    fn row_size() -> u32 {
        /* class */       4 +
        /* kind */        4 +
        /* id */          4 +
        /* space */       4 +
        /* lower_bound */ 4 +
        /* upper_bound */ 4 +
        /* name */        4 +
        /* flags */       4
    }

    fn row_read(data: &[u8], offset: &mut usize, index: u32) -> Result<Self> {
        Ok(ResourceInfoRaw {
            index,
            class: read_le_at::<u32>(data, offset)?,
            kind: read_le_at::<u32>(data, offset)?,
            id: read_le_at::<u32>(data, offset)?,
            space: read_le_at::<u32>(data, offset)?,
            lower_bound: read_le_at::<u32>(data, offset)?,
            upper_bound: read_le_at::<u32>(data, offset)?,
            name: StringRef(read_le_at::<u32>(data, offset)?),
            flags: read_le_at::<u32>(data, offset)?,
        })
    }
}
