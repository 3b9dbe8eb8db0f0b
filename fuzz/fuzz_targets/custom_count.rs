#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(count) = fakehdrs::fuzzing::parse_custom_count_input(input) {
            debug_assert_eq!(input.trim().parse::<usize>().ok(), Some(count));
        }
    }
});
