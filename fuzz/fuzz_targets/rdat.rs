#![no_main]

use libfuzzer_sys::fuzz_target;
use rdatscope::{RuntimeReflection, ValidationConfig};

fuzz_target!(|data: &[u8]| {
    let _ = RuntimeReflection::from_mem(data.to_vec());
    let _ = RuntimeReflection::from_mem_with_config(data.to_vec(), ValidationConfig::disabled());
});
