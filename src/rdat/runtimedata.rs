//! Container parser for runtime data blobs.
//!
//! [`DxilRuntimeData`] reads the table directory, hands every declared region to the reader
//! of its kind and bundles the readers into one [`RuntimeDataContext`]. Everything it exposes
//! borrows from the original buffer; nothing is copied.

use crate::{
    rdat::{
        tables::{
            FunctionReader, FunctionTable, IndexTable, ResourceReader, ResourceTable, StringTable,
        },
        RuntimeDataContext, RuntimeDataPartType, TableHeader, ValidationConfig,
    },
    Error, Result,
};

/// Zero-copy access to all tables of a runtime data blob.
///
/// # Examples
///
/// ```rust
/// use rdatscope::rdat::DxilRuntimeData;
///
/// #[rustfmt::skip]
/// let container = [
///     0x01, 0x00, 0x00, 0x00, // one table
///     0x01, 0x00, 0x00, 0x00, // String
///     0x04, 0x00, 0x00, 0x00, // 4 bytes
///     0x10, 0x00, 0x00, 0x00, // at offset 16
///     b'F', b'o', b'o', 0x00,
/// ];
///
/// let runtime_data = DxilRuntimeData::from(&container)?;
/// assert_eq!(runtime_data.function_table().num_functions(), 0);
/// assert_eq!(runtime_data.string_table().len(), 4);
/// # Ok::<(), rdatscope::Error>(())
/// ```
#[derive(Debug)]
pub struct DxilRuntimeData<'a> {
    data: &'a [u8],
    headers: Vec<TableHeader>,
    context: RuntimeDataContext<'a>,
}

impl<'a> DxilRuntimeData<'a> {
    /// Parse a container with the default [`ValidationConfig`].
    ///
    /// # Errors
    /// See [`DxilRuntimeData::with_config`].
    pub fn from(data: &'a [u8]) -> Result<DxilRuntimeData<'a>> {
        Self::with_config(data, ValidationConfig::default())
    }

    /// Parse a container.
    ///
    /// Table kinds are dispatched by tag. Unknown tags (including `Invalid`) are skipped, and a
    /// later declaration of a table kind replaces an earlier one, unless `config` asks for
    /// either to be rejected. Tables that are not declared stay empty.
    ///
    /// # Arguments
    /// * `data` - The complete container, resident in memory
    /// * `config` - Which structural checks to run up front
    ///
    /// # Errors
    /// - [`crate::Error::Empty`], [`crate::Error::OutOfBounds`] or [`crate::Error::Malformed`]
    ///   if the directory is truncated or a table region exceeds the container
    /// - [`crate::Error::Malformed`] if an enabled structural or partition check fails
    /// - [`crate::Error::UnknownTable`] / [`crate::Error::DuplicateTable`] if rejected by `config`
    pub fn with_config(data: &'a [u8], config: ValidationConfig) -> Result<DxilRuntimeData<'a>> {
        let headers = TableHeader::read_directory(data)?;

        let mut context = RuntimeDataContext::default();
        let mut seen = Vec::with_capacity(headers.len());

        for header in &headers {
            let kind = match header.kind() {
                Some(RuntimeDataPartType::Invalid) | None => {
                    if config.reject_unknown_tables {
                        return Err(Error::UnknownTable(header.table_type));
                    }
                    continue;
                }
                Some(kind) => kind,
            };

            if seen.contains(&kind) {
                if config.reject_duplicate_tables {
                    return Err(Error::DuplicateTable(kind));
                }
            } else {
                seen.push(kind);
            }

            let region = header.data(data)?;
            match kind {
                RuntimeDataPartType::String => {
                    let strings = StringTable::from(region);
                    if config.enable_structural_validation {
                        strings.validate()?;
                    }
                    context.strings = strings;
                }
                RuntimeDataPartType::Index => {
                    let index = IndexTable::from(region);
                    if config.enable_structural_validation {
                        index.validate()?;
                    }
                    context.index = index;
                }
                RuntimeDataPartType::Resource => {
                    let resources = ResourceTable::from(region)?;
                    if config.enable_structural_validation {
                        resources.validate()?;
                    }
                    if config.enable_partition_validation {
                        resources.validate_partition()?;
                    }
                    context.resources = resources;
                }
                RuntimeDataPartType::Function => {
                    let functions = FunctionTable::from(region)?;
                    if config.enable_structural_validation {
                        functions.validate()?;
                    }
                    context.functions = functions;
                }
                RuntimeDataPartType::Invalid => {}
            }
        }

        Ok(DxilRuntimeData {
            data,
            headers,
            context,
        })
    }

    /// The complete container this instance was parsed from
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The table directory, in declaration order, including skipped entries
    #[must_use]
    pub fn table_headers(&self) -> &[TableHeader] {
        &self.headers
    }

    /// The shared reader context handed to every view
    #[must_use]
    pub fn context(&self) -> &RuntimeDataContext<'a> {
        &self.context
    }

    /// The string table reader
    #[must_use]
    pub fn string_table(&self) -> &StringTable<'a> {
        &self.context.strings
    }

    /// The index table reader
    #[must_use]
    pub fn index_table(&self) -> &IndexTable<'a> {
        &self.context.index
    }

    /// The resource table reader
    #[must_use]
    pub fn resource_table(&self) -> &ResourceTable<'a> {
        &self.context.resources
    }

    /// The function table reader
    #[must_use]
    pub fn function_table(&self) -> &FunctionTable<'a> {
        &self.context.functions
    }

    /// View on the function at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index` is out of range.
    pub fn function(&self, index: u32) -> Result<FunctionReader<'a>> {
        self.context.functions.get_item(index, &self.context)
    }

    /// View on the resource at flat `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index` is out of range.
    pub fn resource(&self, index: u32) -> Result<ResourceReader<'a>> {
        self.context
            .resources
            .get_item(index, &self.context.strings)
    }

    /// Iterate over views of all functions
    pub fn functions(&self) -> impl Iterator<Item = FunctionReader<'a>> + '_ {
        self.context.functions.iter(&self.context)
    }
}
