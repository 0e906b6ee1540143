//! Shader feature flags carried by function records.
//!
//! A function record stores its feature set as two `u32` halves; the low half comes first.
//! [`ShaderFeatureFlags::from_halves`] reassembles them. Bits without a named flag are kept, so
//! round-tripping through this type never loses information.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Optional hardware features required by a shader function
    pub struct ShaderFeatureFlags: u64 {
        /// Double precision floating point
        const DOUBLES = 0x0000_0001;
        /// Raw and structured buffers on shader model 4.x hardware
        const COMPUTE_SHADERS_PLUS_RAW_AND_STRUCTURED_BUFFERS = 0x0000_0002;
        /// UAVs at every shader stage
        const UAVS_AT_EVERY_STAGE = 0x0000_0004;
        /// 64 UAV slots
        const UAVS_64 = 0x0000_0008;
        /// Minimum precision types
        const MINIMUM_PRECISION = 0x0000_0010;
        /// D3D 11.1 double extensions
        const DOUBLE_EXTENSIONS_11_1 = 0x0000_0020;
        /// D3D 11.1 shader extensions
        const SHADER_EXTENSIONS_11_1 = 0x0000_0040;
        /// Comparison filtering for feature level 9
        const LEVEL9_COMPARISON_FILTERING = 0x0000_0080;
        /// Tiled resources
        const TILED_RESOURCES = 0x0000_0100;
        /// Stencil reference output
        const STENCIL_REF = 0x0000_0200;
        /// Inner coverage input
        const INNER_COVERAGE = 0x0000_0400;
        /// Typed UAV loads of additional formats
        const TYPED_UAV_LOAD_ADDITIONAL_FORMATS = 0x0000_0800;
        /// Rasterizer ordered views
        const ROVS = 0x0000_1000;
        /// Viewport and render target array index from any stage feeding the rasterizer
        const VIEWPORT_AND_RT_ARRAY_INDEX = 0x0000_2000;
        /// Wave intrinsics
        const WAVE_OPS = 0x0000_4000;
        /// 64-bit integer operations
        const INT64_OPS = 0x0000_8000;
        /// View instancing
        const VIEW_ID = 0x0001_0000;
        /// Barycentrics
        const BARYCENTRICS = 0x0002_0000;
        /// Native 16-bit types
        const NATIVE_LOW_PRECISION = 0x0004_0000;
    }
}

impl ShaderFeatureFlags {
    /// Combine the two record halves, placing `high` in the upper 32 bits
    #[must_use]
    pub fn from_halves(low: u32, high: u32) -> Self {
        Self::from_bits_retain(combine_halves(low, high))
    }
}

/// Combine two `u32` halves into one `u64`, `high` in the upper 32 bits
#[must_use]
pub fn combine_halves(low: u32, high: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves() {
        assert_eq!(combine_halves(0x0000_0001, 0x0000_0002), 0x0000_0002_0000_0001);
        assert_eq!(combine_halves(u32::MAX, 0), 0x0000_0000_FFFF_FFFF);
    }

    #[test]
    fn named_and_retained_bits() {
        let flags = ShaderFeatureFlags::from_halves(0x0000_4001, 0x8000_0000);
        assert!(flags.contains(ShaderFeatureFlags::DOUBLES));
        assert!(flags.contains(ShaderFeatureFlags::WAVE_OPS));
        assert!(!flags.contains(ShaderFeatureFlags::ROVS));
        assert_eq!(flags.bits(), 0x8000_0000_0000_4001);
    }
}
