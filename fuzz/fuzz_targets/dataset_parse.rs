#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(dataset) = replay::parse_dataset(text) {
        for revision in dataset.commits.keys() {
            let entry = dataset.entry(revision).expect("listed revision is present");
            let _ = serde_json::to_string(entry).expect("entry re-serializes");
        }
    }
});
