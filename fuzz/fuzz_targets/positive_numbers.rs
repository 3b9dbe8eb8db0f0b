#![no_main]

use libfuzzer_sys::fuzz_target;

fn take_numeric_string(data: &[u8], max_len: usize) -> String {
    data.iter()
        .take(max_len)
        .map(|&byte| match byte % 12 {
            0..=9 => char::from(b'0' + (byte % 10)),
            10 => '-',
            _ => '+',
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let input = take_numeric_string(data, 24);
    if let Ok(value) = fakehdrs::fuzzing::parse_positive_u64_input(&input) {
        debug_assert!(value >= 1);
    }
});
