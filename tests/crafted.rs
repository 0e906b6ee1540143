/*
Hand-assembled runtime data for the following ray tracing library:

cbuffer g_Scene : register(b0) { float4x4 viewProj; };
SamplerState g_Sampler : register(s0);
Texture2D g_Albedo[4] : register(t2, space1);
RWTexture2D<float4> g_Output : register(u0);

float4 shade(float2 uv) { return g_Albedo[0].SampleLevel(g_Sampler, uv, 0); }

[shader("raygeneration")] void rayGen()            { ... g_Scene, g_Output, shade ... }
[shader("miss")]          void miss(inout Payload p) { ... g_Albedo, g_Sampler, shade ... }
[shader("closesthit")]    void hit(inout Payload p, in Attributes a) { ... g_Output ... }
*/

use std::sync::Arc;

use rdatscope::prelude::*;
use widestring::u16cstr;

const STRINGS: &[u8] = b"\
\x01?rayGen@@YAXXZ\0rayGen\0\
\x01?miss@@YAXUPayload@@@Z\0miss\0\
\x01?hit@@YAXUPayload@@UAttributes@@@Z\0hit\0\
g_Scene\0g_Sampler\0g_Albedo\0g_Output\0\
\x01?shade@@YA?AV?$vector@M$03@@V?$vector@M$01@@@Z\0";

struct Container {
    tables: Vec<(u32, Vec<u8>)>,
}

impl Container {
    fn new() -> Self {
        Container { tables: Vec::new() }
    }

    fn table(mut self, tag: u32, data: Vec<u8>) -> Self {
        self.tables.push((tag, data));
        self
    }

    fn build(self) -> Vec<u8> {
        let mut offset = 4 + self.tables.len() * 12;
        let mut data = Vec::new();
        data.extend_from_slice(&(self.tables.len() as u32).to_le_bytes());
        for (tag, table) in &self.tables {
            data.extend_from_slice(&tag.to_le_bytes());
            data.extend_from_slice(&(table.len() as u32).to_le_bytes());
            data.extend_from_slice(&(offset as u32).to_le_bytes());
            offset += table.len();
        }
        for (_, table) in self.tables {
            data.extend_from_slice(&table);
        }
        data
    }
}

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

fn offset_of(name: &str) -> u32 {
    let mut offset = 0;
    for string in STRINGS.split(|byte| *byte == 0) {
        if string == name.as_bytes() {
            return offset as u32;
        }
        offset += string.len() + 1;
    }
    panic!("{} is not in the string table", name)
}

fn library() -> Vec<u8> {
    let resources = [
        [2, 13, 0, 0, 0, 0, offset_of("g_Scene"), 0],
        [3, 14, 0, 0, 0, 0, offset_of("g_Sampler"), 0],
        [0, 2, 0, 1, 2, 5, offset_of("g_Albedo"), 0],
        [1, 2, 0, 0, 0, 0, offset_of("g_Output"), 0x1],
    ]
    .concat();

    let shade = offset_of("\x01?shade@@YA?AV?$vector@M$03@@V?$vector@M$01@@@Z");
    #[rustfmt::skip]
    let index = [
        2, 0, 3,        // 0: rayGen resources
        1, shade,       // 3: rayGen / miss dependencies
        2, 2, 1,        // 5: miss resources
        1, 3,           // 8: hit resources
    ];

    let functions = [
        [
            offset_of("\x01?rayGen@@YAXXZ"),
            offset_of("rayGen"),
            0,
            3,
            7,
            0,
            0,
            0x0000_0010,
            0,
            0,
            0,
        ],
        [
            offset_of("\x01?miss@@YAXUPayload@@@Z"),
            offset_of("miss"),
            5,
            3,
            11,
            16,
            0,
            0,
            0,
            0,
            0,
        ],
        [
            offset_of("\x01?hit@@YAXUPayload@@UAttributes@@@Z"),
            offset_of("hit"),
            8,
            u32::MAX,
            10,
            16,
            8,
            0x0000_0001,
            0x0000_0001,
            0,
            0,
        ],
    ]
    .concat();

    Container::new()
        .table(1, STRINGS.to_vec())
        .table(4, words(&index))
        .table(3, words(&resources))
        .table(2, words(&functions))
        .build()
}

#[test]
fn crafted_library() {
    let reflection = RuntimeReflection::from_mem(library()).unwrap();
    let library = reflection.library();

    assert_eq!(library.num_functions(), 3);
    assert_eq!(library.num_resources(), 4);
    assert_eq!(library.num_subobjects(), 0);

    let names: Vec<_> = library
        .resources
        .iter()
        .map(|resource| resource.name.to_string_lossy())
        .collect();
    assert_eq!(names, ["g_Scene", "g_Sampler", "g_Albedo", "g_Output"]);

    let albedo = &library.resources[2];
    assert_eq!(albedo.resource_class(), Some(ResourceClass::SRV));
    assert_eq!(albedo.resource_kind(), Some(ResourceKind::Texture2D));
    assert_eq!((albedo.space, albedo.lower_bound, albedo.upper_bound), (1, 2, 5));

    let ray_gen = library.function_by_name("\x01?rayGen@@YAXXZ").unwrap();
    assert_eq!(&*ray_gen.unmangled_name, u16cstr!("rayGen"));
    assert_eq!(ray_gen.shader(), Some(ShaderKind::RayGeneration));
    assert!(ray_gen
        .shader_features()
        .contains(ShaderFeatureFlags::MINIMUM_PRECISION));
    assert_eq!(ray_gen.num_resources(), 2);
    assert_eq!(&*ray_gen.resources[0].name, u16cstr!("g_Scene"));
    assert_eq!(&*ray_gen.resources[1].name, u16cstr!("g_Output"));

    let miss = &library.functions[1];
    assert_eq!(miss.shader(), Some(ShaderKind::Miss));
    assert_eq!(miss.payload_size_in_bytes, 16);
    assert_eq!(miss.num_resources(), 2);
    assert!(Arc::ptr_eq(&miss.dependencies[0], &ray_gen.dependencies[0]));

    let hit = &library.functions[2];
    assert_eq!(hit.shader(), Some(ShaderKind::ClosestHit));
    assert_eq!(hit.attribute_size_in_bytes, 8);
    assert_eq!(hit.feature_flag(), 0x0000_0001_0000_0001);
    assert_eq!(hit.num_dependencies(), 0);
    assert!(Arc::ptr_eq(&hit.resources[0], &ray_gen.resources[1]));
}

#[test]
fn crafted_readers() {
    let data = library();
    let runtime_data = DxilRuntimeData::from(&data).unwrap();

    let resources = runtime_data.resource_table();
    assert_eq!(resources.num_cbuffers(), 1);
    assert_eq!(resources.num_samplers(), 1);
    assert_eq!(resources.num_srvs(), 1);
    assert_eq!(resources.num_uavs(), 1);

    let strings = runtime_data.string_table();
    for index in 0..resources.num_resources() {
        let item = resources.get_item(index, strings).unwrap();
        let class = item.resource_class().unwrap();
        let start = resources.range(class).start;
        let by_class = resources.get_by_class(class, index - start, strings).unwrap();
        assert_eq!(item.raw(), by_class.raw());
    }
    assert_eq!(resources.get_uav(0, strings).unwrap().name().unwrap(), "g_Output");

    let miss = runtime_data.function(1).unwrap();
    assert_eq!(miss.unmangled_name().unwrap(), "miss");
    assert_eq!(miss.parameter_size_in_bytes(), 16);
    let used: Vec<&str> = miss
        .resources()
        .unwrap()
        .map(|resource| resource.and_then(|resource| resource.name()))
        .collect::<rdatscope::Result<_>>()
        .unwrap();
    assert_eq!(used, ["g_Albedo", "g_Sampler"]);

    let hit = runtime_data.function(2).unwrap();
    assert_eq!(hit.dependency_count().unwrap(), 0);
    assert_eq!(hit.dependencies().unwrap().count(), 0);

    assert!(runtime_data.function(3).is_err());
}

#[test]
fn decode_is_idempotent() {
    let data = library();
    let first = RuntimeReflection::from_mem(data.clone()).unwrap();
    let second = RuntimeReflection::from_mem(data).unwrap();

    assert_eq!(first.library(), second.library());
}

#[test]
fn truncated() {
    let data = library();
    for length in [0, 1, 3, 4, 15, 40, data.len() - 1] {
        assert!(
            RuntimeReflection::from_mem(data[..length].to_vec()).is_err(),
            "length {}",
            length
        );
    }
}

#[test]
fn corrupted_row() {
    let mut data = library();

    // rayGen's resource row declares 200 elements
    let directory = 4 + 4 * 12;
    let index_start = directory + STRINGS.len();
    data[index_start..index_start + 4].copy_from_slice(&200_u32.to_le_bytes());

    assert!(matches!(
        RuntimeReflection::from_mem(data.clone()),
        Err(Error::Malformed { .. })
    ));

    let runtime_data = DxilRuntimeData::from(&data).unwrap();
    let miss = runtime_data.function(1).unwrap();
    assert_eq!(miss.resource_count().unwrap(), 2);
    assert!(runtime_data.function(0).unwrap().resource_count().is_err());
}

#[test]
fn unknown_tables_and_classes() {
    let resources = words(&[
        2, 13, 0, 0, 0, 0, 0, 0, // CBuffer
        9, 0, 0, 0, 0, 0, 0, 0, // unknown class
    ]);
    let data = Container::new()
        .table(1, b"a\0".to_vec())
        .table(42, vec![0xFF; 16])
        .table(3, resources)
        .build();

    let reflection = RuntimeReflection::from_mem(data.clone()).unwrap();
    assert_eq!(reflection.library().num_resources(), 1);
    assert_eq!(reflection.runtime_data().resource_table().record_count(), 2);

    assert!(matches!(
        RuntimeReflection::from_mem_with_config(data, ValidationConfig::strict()),
        Err(Error::UnknownTable(42))
    ));
}
