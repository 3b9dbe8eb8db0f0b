#![no_main]

use libfuzzer_sys::fuzz_target;

const MAX_CUSTOM: usize = 256;

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let (seed_bytes, rest) = data.split_at(8);
    let (portion_bytes, rest) = rest.split_at(8);
    let mut seed = [0u8; 8];
    seed.copy_from_slice(seed_bytes);
    let mut portion = [0u8; 8];
    portion.copy_from_slice(portion_bytes);
    let num_custom = usize::from(rest[0]) % MAX_CUSTOM;
    let random_portion = f64::from_le_bytes(portion);

    let Ok(request) = fakehdrs::fuzzing::generate_request_input(
        u64::from_le_bytes(seed),
        num_custom,
        random_portion,
    ) else {
        return;
    };

    assert_eq!(request.len(), num_custom + 5);
    let names: Vec<&str> = request
        .headers()
        .iter()
        .take(5)
        .map(|header| header.name.as_str())
        .collect();
    assert_eq!(names, fakehdrs::generator::PREFIX_NAMES);

    if let Ok((text, jsonl)) = fakehdrs::fuzzing::render_request_input(&request) {
        assert_eq!(text.iter().filter(|&&byte| byte == b'\n').count(), num_custom + 6);
        let parsed: Result<serde_json::Value, _> = serde_json::from_slice(&jsonl);
        assert!(parsed.is_ok());
    }
});
