//! Enumerations for the tagged values stored in runtime data records.
//!
//! Records keep the raw `u32` tags exactly as found in the blob. These enums are the typed
//! view on top of them; conversion goes through `from_repr` and yields `None` for values this
//! library does not know, so an unexpected tag never makes a record undecodable.

use strum::{Display, EnumCount, EnumIter, FromRepr};

/// The kind of a sub-table declared in the container header.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount, FromRepr)]
#[repr(u32)]
pub enum RuntimeDataPartType {
    /// Placeholder tag, never dispatched
    Invalid = 0,
    /// Nul-terminated UTF-8 strings, addressed by byte offset
    String = 1,
    /// Fixed-stride function records
    Function = 2,
    /// Fixed-stride resource binding records
    Resource = 3,
    /// Variable-length `u32` rows, addressed by word offset
    Index = 4,
}

/// The class of a resource binding.
///
/// The numeric values follow the DXIL encoding; the resource table however stores its
/// records grouped in the order given by [`ResourceClass::TABLE_ORDER`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount, FromRepr)]
#[repr(u32)]
pub enum ResourceClass {
    /// Shader resource view
    SRV = 0,
    /// Unordered access view
    UAV = 1,
    /// Constant buffer
    CBuffer = 2,
    /// Sampler state
    Sampler = 3,
}

impl ResourceClass {
    /// The order in which resource classes are grouped inside the resource table
    pub const TABLE_ORDER: [ResourceClass; 4] = [
        ResourceClass::CBuffer,
        ResourceClass::Sampler,
        ResourceClass::SRV,
        ResourceClass::UAV,
    ];

    /// Position of this class inside [`ResourceClass::TABLE_ORDER`]
    #[must_use]
    pub fn table_position(self) -> usize {
        match self {
            ResourceClass::CBuffer => 0,
            ResourceClass::Sampler => 1,
            ResourceClass::SRV => 2,
            ResourceClass::UAV => 3,
        }
    }
}

/// The shape of a resource binding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount, FromRepr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ResourceKind {
    Invalid = 0,
    Texture1D = 1,
    Texture2D = 2,
    Texture2DMS = 3,
    Texture3D = 4,
    TextureCube = 5,
    Texture1DArray = 6,
    Texture2DArray = 7,
    Texture2DMSArray = 8,
    TextureCubeArray = 9,
    TypedBuffer = 10,
    RawBuffer = 11,
    StructuredBuffer = 12,
    CBuffer = 13,
    Sampler = 14,
    TBuffer = 15,
    RTAccelerationStructure = 16,
    FeedbackTexture2D = 17,
    FeedbackTexture2DArray = 18,
}

/// The pipeline stage or library role of a shader function.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount, FromRepr)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ShaderKind {
    Pixel = 0,
    Vertex = 1,
    Geometry = 2,
    Hull = 3,
    Domain = 4,
    Compute = 5,
    Library = 6,
    RayGeneration = 7,
    Intersection = 8,
    AnyHit = 9,
    ClosestHit = 10,
    Miss = 11,
    Callable = 12,
    Mesh = 13,
    Amplification = 14,
}

impl ShaderKind {
    /// Returns `true` for the ray tracing stages that receive a ray payload
    #[must_use]
    pub fn uses_payload(self) -> bool {
        matches!(
            self,
            ShaderKind::AnyHit | ShaderKind::ClosestHit | ShaderKind::Miss
        )
    }

    /// Returns `true` for callable shaders, which receive a parameter block instead of a payload
    #[must_use]
    pub fn uses_parameters(self) -> bool {
        self == ShaderKind::Callable
    }
}
