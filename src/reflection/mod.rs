//! Owned reflection of a shader library.
//!
//! The zero-copy readers in [`crate::rdat`] are tied to the lifetime of the container bytes and
//! resolve references on every access. This module walks them once and produces a
//! [`LibraryDesc`]: a self-contained graph of function and resource descriptors with UTF-16
//! names and resolved lists instead of offsets.
//!
//! - Resource descriptors are created once per resource record; functions referencing the same
//!   record share the same [`ResourceDescRc`]
//! - Names with identical content share one [`WideName`]
//! - Any bad reference or undecodable name fails the whole build
//!
//! # Examples
//!
//! ```rust
//! use rdatscope::RuntimeReflection;
//!
//! #[rustfmt::skip]
//! let container = vec![
//!     0x01, 0x00, 0x00, 0x00,
//!     0x01, 0x00, 0x00, 0x00,
//!     0x04, 0x00, 0x00, 0x00,
//!     0x10, 0x00, 0x00, 0x00,
//!     b'F', b'o', b'o', 0x00,
//! ];
//!
//! let reflection = RuntimeReflection::from_mem(container)?;
//! let library = reflection.library();
//! assert_eq!(library.num_functions(), 0);
//! assert_eq!(library.num_resources(), 0);
//! # Ok::<(), rdatscope::Error>(())
//! ```

mod builder;
mod types;

pub use builder::ReflectionBuilder;
pub use types::{
    FunctionDesc, FunctionDescRc, LibraryDesc, ResourceDesc, ResourceDescRc, SubobjectDesc,
    WideName,
};

use crate::{
    rdat::{DxilRuntimeData, RuntimeDataView, ValidationConfig},
    Result,
};

/// A parsed runtime data container together with its materialized [`LibraryDesc`].
///
/// The descriptor graph is built when the container is loaded, so every decode error surfaces
/// from the constructor. The graph holds no borrows into the container and stays valid for as
/// long as this instance, or any clone of its `Arc`s, is alive.
pub struct RuntimeReflection {
    view: RuntimeDataView,
    library: LibraryDesc,
}

impl RuntimeReflection {
    /// Take ownership of `data`, parse it with the default [`ValidationConfig`] and materialize
    /// the library.
    ///
    /// # Errors
    /// Returns an error if the container is malformed, or if any reference or name reachable
    /// from a record can not be resolved.
    pub fn from_mem(data: Vec<u8>) -> Result<Self> {
        Self::from_mem_with_config(data, ValidationConfig::default())
    }

    /// Take ownership of `data`, parse it with `config` and materialize the library.
    ///
    /// # Errors
    /// Returns an error if the container is malformed, or if any reference or name reachable
    /// from a record can not be resolved.
    pub fn from_mem_with_config(data: Vec<u8>, config: ValidationConfig) -> Result<Self> {
        let view = RuntimeDataView::from_mem_with_config(data, config)?;
        let library = ReflectionBuilder::new(view.runtime_data()).build()?;

        Ok(RuntimeReflection { view, library })
    }

    /// The materialized library
    #[must_use]
    pub fn library(&self) -> &LibraryDesc {
        &self.library
    }

    /// The zero-copy readers the library was built from
    #[must_use]
    pub fn runtime_data(&self) -> &DxilRuntimeData<'_> {
        self.view.runtime_data()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use widestring::u16cstr;

    use super::*;
    use crate::{
        rdat::{ResourceClass, RuntimeDataPartType, ShaderKind},
        test::{function_record, resource_record, words, RdatBuilder, ABSENT},
        Error,
    };

    #[test]
    fn single_function_and_resource() {
        let data = RdatBuilder::new()
            .table(RuntimeDataPartType::String, b"Foo\0Bar\0".to_vec())
            .table(
                RuntimeDataPartType::Resource,
                resource_record(2, 13, 0, 0, 0, 0, 0, 0),
            )
            .table(
                RuntimeDataPartType::Function,
                function_record(0, 4, ABSENT, ABSENT, 6, 0, 0, 0, 0),
            )
            .build();

        let reflection = RuntimeReflection::from_mem(data).unwrap();
        let library = reflection.library();

        assert_eq!(library.num_functions(), 1);
        let function = &library.functions[0];
        assert_eq!(&*function.name, u16cstr!("Foo"));
        assert_eq!(&*function.unmangled_name, u16cstr!("Bar"));
        assert_eq!(function.shader(), Some(ShaderKind::Library));
        assert!(function.resources.is_empty());
        assert!(function.dependencies.is_empty());

        assert_eq!(library.num_resources(), 1);
        let resource = &library.resources[0];
        assert_eq!(&*resource.name, u16cstr!("Foo"));
        assert_eq!(resource.resource_class(), Some(ResourceClass::CBuffer));
        assert!(Arc::ptr_eq(&function.name, &resource.name));

        assert_eq!(library.num_subobjects(), 0);
        assert_eq!(reflection.runtime_data().function_table().num_functions(), 1);
    }

    #[test]
    fn shared_resource() {
        let data = RdatBuilder::new()
            .table(RuntimeDataPartType::String, b"a\0b\0tex\0".to_vec())
            .table(RuntimeDataPartType::Index, words(&[1, 0]))
            .table(
                RuntimeDataPartType::Resource,
                resource_record(0, 2, 0, 0, 0, 0, 4, 0),
            )
            .table(
                RuntimeDataPartType::Function,
                [
                    function_record(0, 0, 0, ABSENT, 6, 0, 0, 0, 0),
                    function_record(2, 2, 0, ABSENT, 6, 0, 0, 0, 0),
                ]
                .concat(),
            )
            .build();

        let reflection = RuntimeReflection::from_mem(data).unwrap();
        let library = reflection.library();

        assert_eq!(library.num_resources(), 1);
        let first = &library.functions[0].resources[0];
        let second = &library.functions[1].resources[0];
        assert!(Arc::ptr_eq(first, second));
        assert!(Arc::ptr_eq(first, &library.resources[0]));
    }

    #[test]
    fn idempotent() {
        let data = RdatBuilder::new()
            .table(RuntimeDataPartType::String, b"main\0helper\0".to_vec())
            .table(RuntimeDataPartType::Index, words(&[1, 5]))
            .table(
                RuntimeDataPartType::Function,
                [
                    function_record(0, 0, ABSENT, 0, 11, 32, 8, 3, 1),
                    function_record(5, 5, ABSENT, ABSENT, 12, 16, 0, 0, 0),
                ]
                .concat(),
            )
            .build();

        let first = RuntimeReflection::from_mem(data.clone()).unwrap();
        let second = RuntimeReflection::from_mem(data).unwrap();

        assert_eq!(first.library(), second.library());
        assert_eq!(
            first.library().functions[1].parameter_size_in_bytes(),
            16
        );
    }

    #[test]
    fn errors_abort() {
        assert!(matches!(
            RuntimeReflection::from_mem(Vec::new()),
            Err(Error::Empty)
        ));

        // dependency row at word 4 of a 2-word index table
        let data = RdatBuilder::new()
            .table(RuntimeDataPartType::String, b"main\0".to_vec())
            .table(RuntimeDataPartType::Index, words(&[1, 0]))
            .table(
                RuntimeDataPartType::Function,
                function_record(0, 0, ABSENT, 4, 6, 0, 0, 0, 0),
            )
            .build();

        assert!(matches!(
            RuntimeReflection::from_mem(data),
            Err(Error::InvalidReference {
                table: RuntimeDataPartType::Index,
                reference: 4
            })
        ));
    }
}
