#![no_main]

use libfuzzer_sys::fuzz_target;
use markdef::{Descriptor, DescriptorKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsed descriptors always print back to their trimmed input
        for kind in DescriptorKind::ALL {
            if let Some(descriptor) = Descriptor::parse(kind, s) {
                assert_eq!(descriptor.qualified_name(), s.trim());
            }
        }
    }
});
