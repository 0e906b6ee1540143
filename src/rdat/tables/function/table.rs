use crate::{
    rdat::{
        tables::{FunctionInfoRaw, FunctionReader, RecordTable},
        RuntimeDataContext,
    },
    Result,
};

/// The `Function` table: a plain array of function records with by-index access.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionTable<'a> {
    records: RecordTable<'a, FunctionInfoRaw>,
}

impl<'a> FunctionTable<'a> {
    /// Create the function table over `data`.
    ///
    /// # Errors
    /// Returns an error if the region holds more records than can be indexed.
    pub fn from(data: &'a [u8]) -> Result<FunctionTable<'a>> {
        Ok(FunctionTable {
            records: RecordTable::new(data)?,
        })
    }

    /// Check that the region is a whole number of records.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a partial record trails the table.
    pub fn validate(&self) -> Result<()> {
        self.records.validate()
    }

    /// Number of functions in the table
    #[must_use]
    pub fn num_functions(&self) -> u32 {
        self.records.row_count()
    }

    /// Decode the raw record at `index`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_functions()`.
    pub fn raw(&self, index: u32) -> Result<FunctionInfoRaw> {
        self.records.get(index)
    }

    /// Get a view on the function at `index`, bound to `context`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidReference`] if `index >= num_functions()`.
    pub fn get_item(
        &self,
        index: u32,
        context: &RuntimeDataContext<'a>,
    ) -> Result<FunctionReader<'a>> {
        Ok(FunctionReader::new(self.raw(index)?, *context))
    }

    /// Iterate over views of all functions, in table order
    pub fn iter<'s>(
        &'s self,
        context: &'s RuntimeDataContext<'a>,
    ) -> impl Iterator<Item = FunctionReader<'a>> + 's {
        self.records
            .iter()
            .map(move |info| FunctionReader::new(info, *context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rdat::{
            tables::{IndexTable, ResourceTable, StringTable},
            ResourceClass, ShaderKind,
        },
        test::{function_record, resource_record, words, ABSENT},
        Error,
    };

    const STRINGS: &[u8] = b"main\0miss\0g_Scene\0g_Sampler\0helper\0";

    #[test]
    fn reader() {
        let resources: Vec<u8> = [
            resource_record(2, 13, 0, 0, 0, 0, 10, 0),
            resource_record(3, 14, 0, 0, 0, 0, 18, 0),
        ]
        .concat();
        // row 0: [1, 0], row 3: [28]
        let index = words(&[2, 1, 0, 1, 28]);
        let functions: Vec<u8> = [
            function_record(0, 0, 0, 3, 11, 16, 8, 1, 0),
            function_record(5, 5, ABSENT, ABSENT, 12, 4, 0, 0, 0),
        ]
        .concat();

        let context = RuntimeDataContext {
            strings: StringTable::from(STRINGS),
            index: IndexTable::from(&index),
            resources: ResourceTable::from(&resources).unwrap(),
            functions: FunctionTable::from(&functions).unwrap(),
        };
        let table = context.functions;
        table.validate().unwrap();
        assert_eq!(table.num_functions(), 2);

        let main = table.get_item(0, &context).unwrap();
        assert_eq!(main.name().unwrap(), "main");
        assert_eq!(main.unmangled_name().unwrap(), "main");
        assert_eq!(main.shader_kind(), Some(ShaderKind::Miss));
        assert_eq!(main.payload_size_in_bytes(), 16);
        assert_eq!(main.attribute_size_in_bytes(), 8);
        assert_eq!(main.feature_flag(), 1);

        assert_eq!(main.resource_count().unwrap(), 2);
        assert_eq!(main.resource(0).unwrap().name().unwrap(), "g_Sampler");
        assert_eq!(
            main.resource(1).unwrap().resource_class(),
            Some(ResourceClass::CBuffer)
        );
        let names: Vec<&str> = main
            .resources()
            .unwrap()
            .map(|resource| resource.and_then(|resource| resource.name()))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(names, vec!["g_Sampler", "g_Scene"]);

        assert_eq!(main.dependency_count().unwrap(), 1);
        assert_eq!(main.dependency(0).unwrap(), "helper");
        assert!(main.dependency(1).is_err());

        let miss = table.get_item(1, &context).unwrap();
        assert_eq!(miss.name().unwrap(), "miss");
        assert_eq!(miss.shader_kind(), Some(ShaderKind::Callable));
        assert_eq!(miss.parameter_size_in_bytes(), 4);
        assert_eq!(miss.resource_count().unwrap(), 0);
        assert_eq!(miss.resources().unwrap().count(), 0);
        assert_eq!(miss.dependency_count().unwrap(), 0);
        assert_eq!(miss.dependencies().unwrap().count(), 0);

        assert_eq!(table.iter(&context).count(), 2);
        assert!(matches!(
            table.get_item(2, &context),
            Err(Error::InvalidReference { reference: 2, .. })
        ));
    }

    #[test]
    fn absent_lists_skip_index_table() {
        let functions = function_record(0, 0, ABSENT, ABSENT, 6, 0, 0, 0, 0);
        let context = RuntimeDataContext {
            strings: StringTable::from(STRINGS),
            functions: FunctionTable::from(&functions).unwrap(),
            ..RuntimeDataContext::default()
        };

        let function = context.functions.get_item(0, &context).unwrap();
        assert_eq!(function.resource_count().unwrap(), 0);
        assert_eq!(function.dependency_count().unwrap(), 0);
        assert!(function.resource(0).is_err());
    }

    #[test]
    fn dangling_references() {
        // row 0 references resource 5, which does not exist
        let index = words(&[1, 5]);
        let functions = function_record(0, 0, 0, 7, 6, 0, 0, 0, 0);
        let context = RuntimeDataContext {
            strings: StringTable::from(STRINGS),
            index: IndexTable::from(&index),
            functions: FunctionTable::from(&functions).unwrap(),
            ..RuntimeDataContext::default()
        };

        let function = context.functions.get_item(0, &context).unwrap();
        assert_eq!(function.resource_count().unwrap(), 1);
        assert!(function.resource(0).is_err());
        assert!(function.resources().unwrap().next().unwrap().is_err());
        assert!(function.dependency_count().is_err());
        assert!(function.dependencies().is_err());
    }
}
