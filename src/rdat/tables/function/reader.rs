use crate::{
    rdat::{
        tables::{
            FunctionInfoRaw, IndexRow, IndexRowIterator, ResourceReader, ResourceTable,
            StringTable,
        },
        ResourceRef, RuntimeDataContext, ShaderFeatureFlags, ShaderKind, StringRef,
    },
    Result,
};

/// A non-owning view on one function record.
///
/// Created on demand by [`crate::rdat::tables::FunctionTable`] together with the
/// [`RuntimeDataContext`] it resolves names, resource lists and dependency lists against.
#[derive(Clone, Copy, Debug)]
pub struct FunctionReader<'a> {
    info: FunctionInfoRaw,
    context: RuntimeDataContext<'a>,
}

impl<'a> FunctionReader<'a> {
    /// Bind a decoded record to the tables its references resolve against
    #[must_use]
    pub fn new(info: FunctionInfoRaw, context: RuntimeDataContext<'a>) -> Self {
        FunctionReader { info, context }
    }

    /// The underlying raw record
    #[must_use]
    pub fn raw(&self) -> &FunctionInfoRaw {
        &self.info
    }

    /// Index of the record inside the function table
    #[must_use]
    pub fn index(&self) -> u32 {
        self.info.index
    }

    /// Resolve the mangled function name.
    ///
    /// # Errors
    /// Returns an error if the name offset is not a valid string of the string table.
    pub fn name(&self) -> Result<&'a str> {
        self.context.strings.get(self.info.name)
    }

    /// Resolve the unmangled function name.
    ///
    /// # Errors
    /// Returns an error if the name offset is not a valid string of the string table.
    pub fn unmangled_name(&self) -> Result<&'a str> {
        self.context.strings.get(self.info.unmangled_name)
    }

    /// The shader kind, `None` for unknown tags
    #[must_use]
    pub fn shader_kind(&self) -> Option<ShaderKind> {
        self.info.shader_kind()
    }

    /// Payload size of hit, miss and closest hit shaders
    #[must_use]
    pub fn payload_size_in_bytes(&self) -> u32 {
        self.info.payload_size_in_bytes
    }

    /// Parameter size of callable shaders.
    ///
    /// Payload and parameters are mutually exclusive by shader kind, so this reads the same
    /// field as [`FunctionReader::payload_size_in_bytes`].
    #[must_use]
    pub fn parameter_size_in_bytes(&self) -> u32 {
        self.info.payload_size_in_bytes
    }

    /// Attribute size of closest hit and any hit shaders
    #[must_use]
    pub fn attribute_size_in_bytes(&self) -> u32 {
        self.info.attribute_size_in_bytes
    }

    /// Low 32 bits of the feature flag
    #[must_use]
    pub fn feature_info1(&self) -> u32 {
        self.info.feature_info1
    }

    /// High 32 bits of the feature flag
    #[must_use]
    pub fn feature_info2(&self) -> u32 {
        self.info.feature_info2
    }

    /// The complete 64-bit feature flag
    #[must_use]
    pub fn feature_flag(&self) -> u64 {
        self.info.feature_flag()
    }

    /// The feature flag as [`ShaderFeatureFlags`]
    #[must_use]
    pub fn shader_features(&self) -> ShaderFeatureFlags {
        self.info.shader_features()
    }

    /// Reserved shader stage flag
    #[must_use]
    pub fn shader_stage_flag(&self) -> u32 {
        self.info.shader_stage_flag
    }

    /// Reserved minimum shader target
    #[must_use]
    pub fn min_shader_target(&self) -> u32 {
        self.info.min_shader_target
    }

    /// The index row listing the function's resources. An absent reference yields an empty
    /// row without touching the index table.
    ///
    /// # Errors
    /// Returns an error if the row reference is not a valid row of the index table.
    pub fn resource_row(&self) -> Result<IndexRow<'a, ResourceRef>> {
        match self.info.resources {
            Some(row) => self.context.index.row(row),
            None => Ok(IndexRow::empty()),
        }
    }

    /// Number of resources used by the function
    ///
    /// # Errors
    /// Returns an error if the row reference is not a valid row of the index table.
    pub fn resource_count(&self) -> Result<u32> {
        Ok(self.resource_row()?.count())
    }

    /// Resolve the `i`-th resource used by the function.
    ///
    /// # Errors
    /// Returns an error if the row or the resource index it holds is out of range.
    pub fn resource(&self, i: u32) -> Result<ResourceReader<'a>> {
        let resource = self.resource_row()?.at(i)?;
        self.context
            .resources
            .get_item(resource.index(), &self.context.strings)
    }

    /// Iterate over the resources used by the function.
    ///
    /// # Errors
    /// Returns an error if the row reference is not a valid row of the index table. Invalid
    /// resource indices inside the row are reported per item.
    pub fn resources(&self) -> Result<FunctionResourceIterator<'a>> {
        Ok(FunctionResourceIterator {
            row: self.resource_row()?.iter(),
            resources: self.context.resources,
            strings: self.context.strings,
        })
    }

    /// The index row listing the names of the functions this one depends on. An absent
    /// reference yields an empty row without touching the index table.
    ///
    /// # Errors
    /// Returns an error if the row reference is not a valid row of the index table.
    pub fn dependency_row(&self) -> Result<IndexRow<'a, StringRef>> {
        match self.info.dependencies {
            Some(row) => self.context.index.row(row),
            None => Ok(IndexRow::empty()),
        }
    }

    /// Number of functions this one depends on
    ///
    /// # Errors
    /// Returns an error if the row reference is not a valid row of the index table.
    pub fn dependency_count(&self) -> Result<u32> {
        Ok(self.dependency_row()?.count())
    }

    /// Resolve the name of the `i`-th dependency.
    ///
    /// # Errors
    /// Returns an error if the row or the string offset it holds is out of range.
    pub fn dependency(&self, i: u32) -> Result<&'a str> {
        let name = self.dependency_row()?.at(i)?;
        self.context.strings.get(name)
    }

    /// Iterate over the names of the functions this one depends on.
    ///
    /// # Errors
    /// Returns an error if the row reference is not a valid row of the index table. Invalid
    /// string offsets inside the row are reported per item.
    pub fn dependencies(&self) -> Result<DependencyIterator<'a>> {
        Ok(DependencyIterator {
            row: self.dependency_row()?.iter(),
            strings: self.context.strings,
        })
    }
}

/// Iterator over the resources of a function, see [`FunctionReader::resources`]
pub struct FunctionResourceIterator<'a> {
    row: IndexRowIterator<'a, ResourceRef>,
    resources: ResourceTable<'a>,
    strings: StringTable<'a>,
}

impl<'a> Iterator for FunctionResourceIterator<'a> {
    type Item = Result<ResourceReader<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let resource = self.row.next()?;
        Some(self.resources.get_item(resource.index(), &self.strings))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.row.size_hint()
    }
}

/// Iterator over the dependency names of a function, see [`FunctionReader::dependencies`]
pub struct DependencyIterator<'a> {
    row: IndexRowIterator<'a, StringRef>,
    strings: StringTable<'a>,
}

impl<'a> Iterator for DependencyIterator<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.row.next()?;
        Some(self.strings.get(name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.row.size_hint()
    }
}
