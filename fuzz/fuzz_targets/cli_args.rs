#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let args: Vec<&str> = input.split_whitespace().take(64).collect();
        if let Ok(parsed) = fakehdrs::fuzzing::parse_cli_input(args) {
            debug_assert!(parsed.iterations >= 1);
            let portion = parsed.random_portion.get();
            debug_assert!((0.0..=1.0).contains(&portion));
        }
    }
});
