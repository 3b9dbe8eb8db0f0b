#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(value) = fakehdrs::fuzzing::parse_random_portion_input(input) {
            debug_assert!(value.is_finite());
            debug_assert!((0.0..=1.0).contains(&value));
        }
    }
});
