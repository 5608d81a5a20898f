#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode to output or a typed error, never panic.
    let mut out = Vec::new();
    let _ = telex::decode::decode_all(data, &mut out);
});
