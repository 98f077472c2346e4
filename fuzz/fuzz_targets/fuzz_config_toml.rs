#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing - this should never panic
        let _ = toml::from_str::<markdef::Config>(content);
        let _ = markdef::config::parse_with_warnings(content, Path::new("config.toml"));
    }
});
