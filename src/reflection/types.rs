use std::sync::Arc;

use widestring::U16CStr;

use crate::rdat::{
    flags::combine_halves, ResourceClass, ResourceKind, ShaderFeatureFlags, ShaderKind,
};

/// A shared, nul-terminated UTF-16 name
pub type WideName = Arc<U16CStr>;
/// A reference to a `ResourceDesc`
pub type ResourceDescRc = Arc<ResourceDesc>;
/// A reference to a `FunctionDesc`
pub type FunctionDescRc = Arc<FunctionDesc>;

/// An owned resource binding.
///
/// Scalar fields hold the raw values of the resource record; the typed accessors return `None`
/// for values this library does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDesc {
    /// `ResourceClass` tag
    pub class: u32,
    /// `ResourceKind` tag
    pub kind: u32,
    /// Identifier, unique within the class
    pub id: u32,
    /// Register space
    pub space: u32,
    /// First bound register
    pub lower_bound: u32,
    /// Last bound register
    pub upper_bound: u32,
    /// Name of the binding
    pub name: WideName,
    /// Flags word, passed through as stored
    pub flags: u32,
}

impl ResourceDesc {
    /// The typed resource class
    #[must_use]
    pub fn resource_class(&self) -> Option<ResourceClass> {
        ResourceClass::from_repr(self.class)
    }

    /// The typed resource kind
    #[must_use]
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        ResourceKind::from_repr(self.kind)
    }
}

/// An owned shader function with its resource and dependency lists resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDesc {
    /// Mangled name
    pub name: WideName,
    /// Unmangled name
    pub unmangled_name: WideName,
    /// Resources used by the function, shared with [`LibraryDesc::resources`]
    pub resources: Vec<ResourceDescRc>,
    /// Names of the functions this one depends on
    pub dependencies: Vec<WideName>,
    /// `ShaderKind` tag
    pub shader_kind: u32,
    /// Payload size for hit and miss shaders, parameter size for callable shaders
    pub payload_size_in_bytes: u32,
    /// Attribute size for closest hit and any hit shaders
    pub attribute_size_in_bytes: u32,
    /// Low half of the feature flag
    pub feature_info1: u32,
    /// High half of the feature flag
    pub feature_info2: u32,
    /// Reserved, passed through as stored
    pub shader_stage_flag: u32,
    /// Reserved, passed through as stored
    pub min_shader_target: u32,
}

impl FunctionDesc {
    /// Number of resources used by the function
    #[must_use]
    pub fn num_resources(&self) -> usize {
        self.resources.len()
    }

    /// Number of functions this one depends on
    #[must_use]
    pub fn num_dependencies(&self) -> usize {
        self.dependencies.len()
    }

    /// The typed shader kind
    #[must_use]
    pub fn shader(&self) -> Option<ShaderKind> {
        ShaderKind::from_repr(self.shader_kind)
    }

    /// Alias of `payload_size_in_bytes`, for callable shaders
    #[must_use]
    pub fn parameter_size_in_bytes(&self) -> u32 {
        self.payload_size_in_bytes
    }

    /// The 64-bit feature flag
    #[must_use]
    pub fn feature_flag(&self) -> u64 {
        combine_halves(self.feature_info1, self.feature_info2)
    }

    /// The feature flag as typed flags, unknown bits retained
    #[must_use]
    pub fn shader_features(&self) -> ShaderFeatureFlags {
        ShaderFeatureFlags::from_halves(self.feature_info1, self.feature_info2)
    }
}

/// A subobject of a shader library. Runtime data carries none yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubobjectDesc {}

/// The owned reflection of a shader library.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryDesc {
    /// All functions, in function table order
    pub functions: Vec<FunctionDescRc>,
    /// All classified resources, in resource table order
    pub resources: Vec<ResourceDescRc>,
    /// Always empty
    pub subobjects: Vec<SubobjectDesc>,
}

impl LibraryDesc {
    /// Number of functions
    #[must_use]
    pub fn num_functions(&self) -> usize {
        self.functions.len()
    }

    /// Number of resources
    #[must_use]
    pub fn num_resources(&self) -> usize {
        self.resources.len()
    }

    /// Number of subobjects
    #[must_use]
    pub fn num_subobjects(&self) -> usize {
        self.subobjects.len()
    }

    /// Find the first function whose mangled name equals `name`
    #[must_use]
    pub fn function_by_name(&self, name: &str) -> Option<&FunctionDescRc> {
        self.functions.iter().find(|function| {
            function
                .name
                .as_slice()
                .iter()
                .copied()
                .eq(name.encode_utf16())
        })
    }
}
