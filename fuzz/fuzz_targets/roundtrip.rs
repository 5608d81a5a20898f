#![no_main]
use libfuzzer_sys::fuzz_target;

use telex::code::ALPHABET;

fuzz_target!(|data: &[u8]| {
    let text: Vec<u8> = data
        .iter()
        .map(|&b| ALPHABET[usize::from(b) % ALPHABET.len()])
        .collect();

    let mut packed = Vec::new();
    telex::encode::encode_all(&text[..], &mut packed).unwrap();

    let mut recovered = Vec::new();
    telex::decode::decode_all(&packed[..], &mut recovered).unwrap();
    assert_eq!(text, recovered);
});
