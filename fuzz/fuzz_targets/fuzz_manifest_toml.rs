#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz manifest TOML parsing - this should never panic
        let _ = markdef::infrastructure::repositories::parse_manifest(
            content,
            Path::new("markdef.lock"),
        );
    }
});
