#![no_main]

use libfuzzer_sys::fuzz_target;
use seedguard_shamir::artifact::{parse_primary, parse_share};

fuzz_target!(|data: &[u8]| {
    // Parsing must never panic on arbitrary input — always Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_primary(s);
        let _ = parse_share(s);

        // Prepend the format prefixes to exercise deeper parsing paths
        let _ = parse_primary(&format!("sgp1{}", s));
        let _ = parse_share(&format!("sgs1{}", s));
    }
});
