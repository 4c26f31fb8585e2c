#![no_main]

use generate::{generate_script_output, Dictionary, GenerationLimits};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&data[..8]);
    // Keep documents small so each run stays fast.
    let max = usize::from(data[8] % 16) + 1;

    let mut rng = StdRng::seed_from_u64(u64::from_le_bytes(seed));
    let output =
        generate_script_output(Dictionary::embedded(), GenerationLimits::uniform(max), &mut rng);
    let text = model::to_json_string(&output);
    let value: serde_json::Value = serde_json::from_str(&text).expect("generated output is JSON");
    let object = value.as_object().expect("document is an object");

    if output.is_error() {
        assert_eq!(object.len(), 1);
    } else {
        assert!(!object.is_empty() && !object.contains_key("error"));
    }
});
