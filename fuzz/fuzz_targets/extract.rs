#![no_main]

use enum_names::{FixedName, try_extract_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only `&str` signatures reach the extractor
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(name) = try_extract_name(s) {
            assert!(!name.is_empty());
            assert!(!name.contains(':') && !name.contains('>'));
            // A name always fits a buffer of its own length
            if name.len() <= 64 {
                let buffer = FixedName::<64>::new(&format!("{name:<64}"));
                assert!(buffer.as_str().starts_with(name));
            }
        }
    }
});
