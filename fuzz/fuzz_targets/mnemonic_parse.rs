#![no_main]

use libfuzzer_sys::fuzz_target;
use seedguard_core::mnemonic::words_to_entropy;

fuzz_target!(|data: &[u8]| {
    // words_to_entropy must never panic — it should always return Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        let words: Vec<String> = s.split_whitespace().map(str::to_string).collect();
        let _ = words_to_entropy(&words);
    }
});
