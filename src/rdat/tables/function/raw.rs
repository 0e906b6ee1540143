use crate::{
    file::io::read_le_at,
    rdat::{
        flags::combine_halves, tables::RowReadable, IndexRowRef, ResourceRef,
        RuntimeDataPartType, ShaderFeatureFlags, ShaderKind, StringRef,
    },
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One shader function record of the `Function` table. 11 x `u32`
pub struct FunctionInfoRaw {
    /// Zero-based record index within the function table
    pub index: u32,
    /// Mangled function name, an offset into the string table
    pub name: StringRef,
    /// Unmangled function name, an offset into the string table
    pub unmangled_name: StringRef,
    /// Row of resource indices used by the function, `None` if absent
    pub resources: Option<IndexRowRef<ResourceRef>>,
    /// Row of string offsets naming the functions this one depends on, `None` if absent
    pub dependencies: Option<IndexRowRef<StringRef>>,
    /// Shader kind tag, see [`ShaderKind`]
    pub shader_kind: u32,
    /// Payload size for hit, miss and closest hit shaders; parameter size for callable shaders
    pub payload_size_in_bytes: u32,
    /// Attribute size for closest hit and any hit shaders
    pub attribute_size_in_bytes: u32,
    /// Low 32 bits of the feature flags
    pub feature_info1: u32,
    /// High 32 bits of the feature flags
    pub feature_info2: u32,
    /// Valid shader stage flags, reserved
    pub shader_stage_flag: u32,
    /// Minimum shader target, reserved
    pub min_shader_target: u32,
}

impl FunctionInfoRaw {
    /// The typed shader kind, `None` for tags this library does not know
    #[must_use]
    pub fn shader_kind(&self) -> Option<ShaderKind> {
        ShaderKind::from_repr(self.shader_kind)
    }

    /// The 64-bit feature flag, `feature_info2` in the high half
    #[must_use]
    pub fn feature_flag(&self) -> u64 {
        combine_halves(self.feature_info1, self.feature_info2)
    }

    /// The feature flag as [`ShaderFeatureFlags`]
    #[must_use]
    pub fn shader_features(&self) -> ShaderFeatureFlags {
        ShaderFeatureFlags::from_halves(self.feature_info1, self.feature_info2)
    }
}

impl RowReadable for FunctionInfoRaw {
    const TABLE: RuntimeDataPartType = RuntimeDataPartType::Function;

    #[rustfmt::skip]
    fn row_size() -> u32 {
        /* name */                    4 +
        /* unmangled_name */          4 +
        /* resources */               4 +
        /* dependencies */            4 +
        /* shader_kind */             4 +
        /* payload_size_in_bytes */   4 +
        /* attribute_size_in_bytes */ 4 +
        /* feature_info1 */           4 +
        /* feature_info2 */           4 +
        /* shader_stage_flag */       4 +
        /* min_shader_target */       4
    }

    fn row_read(data: &[u8], offset: &mut usize, index: u32) -> Result<Self> {
        Ok(FunctionInfoRaw {
            index,
            name: StringRef(read_le_at::<u32>(data, offset)?),
            unmangled_name: StringRef(read_le_at::<u32>(data, offset)?),
            resources: IndexRowRef::from_raw(read_le_at::<u32>(data, offset)?),
            dependencies: IndexRowRef::from_raw(read_le_at::<u32>(data, offset)?),
            shader_kind: read_le_at::<u32>(data, offset)?,
            payload_size_in_bytes: read_le_at::<u32>(data, offset)?,
            attribute_size_in_bytes: read_le_at::<u32>(data, offset)?,
            feature_info1: read_le_at::<u32>(data, offset)?,
            feature_info2: read_le_at::<u32>(data, offset)?,
            shader_stage_flag: read_le_at::<u32>(data, offset)?,
            min_shader_target: read_le_at::<u32>(data, offset)?,
        })
    }
}
