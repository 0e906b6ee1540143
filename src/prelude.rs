//! # rdatscope Prelude
//!
//! The most commonly used types of the library, for glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all rdatscope operations
pub use crate::Error;

/// The result type used throughout rdatscope
pub use crate::Result;

/// Configuration for the checks run while loading a container
pub use crate::ValidationConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Parse a container and materialize its library
pub use crate::RuntimeReflection;

/// Zero-copy container access
pub use crate::rdat::{DxilRuntimeData, RuntimeDataView};

// ================================================================================================
// Table Readers and Views
// ================================================================================================

/// Readers for the four sub-tables and the views they produce
pub use crate::rdat::{
    FunctionReader, FunctionTable, IndexTable, ResourceReader, ResourceTable, RuntimeDataContext,
    StringTable,
};

/// Typed references between tables
pub use crate::rdat::{IndexRowRef, ResourceRef, StringRef};

/// Typed record values
pub use crate::rdat::{
    ResourceClass, ResourceKind, RuntimeDataPartType, ShaderFeatureFlags, ShaderKind,
};

// ================================================================================================
// Reflection
// ================================================================================================

/// Owned descriptors
pub use crate::reflection::{
    FunctionDesc, FunctionDescRc, LibraryDesc, ResourceDesc, ResourceDescRc, WideName,
};
