use std::{collections::HashMap, sync::Arc};

use widestring::U16CString;

use crate::{
    rdat::{DxilRuntimeData, FunctionReader, ResourceReader, RuntimeDataPartType, StringRef},
    reflection::{
        FunctionDesc, FunctionDescRc, LibraryDesc, ResourceDesc, ResourceDescRc, WideName,
    },
    Error, Result,
};

/// Materializes the owned [`LibraryDesc`] of a parsed container.
///
/// Names are widened once per distinct string content and shared between every descriptor
/// that uses them. Resources are materialized once per record and shared between all functions
/// referencing that record. Any failure aborts the build; no partial graph is returned.
pub struct ReflectionBuilder<'a, 'r> {
    runtime_data: &'r DxilRuntimeData<'a>,
    names: HashMap<&'a str, WideName>,
    resources: Vec<ResourceDescRc>,
}

impl<'a, 'r> ReflectionBuilder<'a, 'r> {
    /// Create a builder over `runtime_data`
    #[must_use]
    pub fn new(runtime_data: &'r DxilRuntimeData<'a>) -> Self {
        ReflectionBuilder {
            runtime_data,
            names: HashMap::new(),
            resources: Vec::new(),
        }
    }

    /// Walk all tables and build the descriptor graph.
    ///
    /// # Errors
    /// Returns the first error met while resolving a reference or converting a name.
    pub fn build(mut self) -> Result<LibraryDesc> {
        let runtime_data = self.runtime_data;
        let resource_table = runtime_data.resource_table();
        let strings = runtime_data.string_table();

        self.resources.reserve(resource_table.num_resources() as usize);
        for resource in resource_table.iter(strings) {
            let resource = self.add_resource(&resource?)?;
            self.resources.push(resource);
        }

        let mut functions =
            Vec::with_capacity(runtime_data.function_table().num_functions() as usize);
        for function in runtime_data.functions() {
            functions.push(self.add_function(&function)?);
        }

        Ok(LibraryDesc {
            functions,
            resources: self.resources,
            subobjects: Vec::new(),
        })
    }

    fn add_resource(&mut self, reader: &ResourceReader<'a>) -> Result<ResourceDescRc> {
        let info = reader.raw();

        Ok(Arc::new(ResourceDesc {
            class: info.class,
            kind: info.kind,
            id: info.id,
            space: info.space,
            lower_bound: info.lower_bound,
            upper_bound: info.upper_bound,
            name: self.wide_name(info.name)?,
            flags: info.flags,
        }))
    }

    fn add_function(&mut self, reader: &FunctionReader<'a>) -> Result<FunctionDescRc> {
        let info = reader.raw();

        let resources = reader
            .resource_row()?
            .iter()
            .map(|resource| {
                self.resources
                    .get(resource.index() as usize)
                    .cloned()
                    .ok_or(Error::InvalidReference {
                        table: RuntimeDataPartType::Resource,
                        reference: resource.index(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let dependencies = reader
            .dependency_row()?
            .iter()
            .map(|name| self.wide_name(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Arc::new(FunctionDesc {
            name: self.wide_name(info.name)?,
            unmangled_name: self.wide_name(info.unmangled_name)?,
            resources,
            dependencies,
            shader_kind: info.shader_kind,
            payload_size_in_bytes: info.payload_size_in_bytes,
            attribute_size_in_bytes: info.attribute_size_in_bytes,
            feature_info1: info.feature_info1,
            feature_info2: info.feature_info2,
            shader_stage_flag: info.shader_stage_flag,
            min_shader_target: info.min_shader_target,
        }))
    }

    fn wide_name(&mut self, reference: StringRef) -> Result<WideName> {
        let name = self.runtime_data.string_table().get(reference)?;
        if let Some(wide) = self.names.get(name) {
            return Ok(wide.clone());
        }

        let wide: WideName = match U16CString::from_str(name) {
            Ok(wide) => Arc::from(wide.into_boxed_ucstr()),
            Err(_) => return Err(Error::InvalidString(reference.offset())),
        };

        self.names.insert(name, wide.clone());
        Ok(wide)
    }
}
