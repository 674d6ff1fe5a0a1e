#![no_main]

use keyfilter::input::Document;
use keyfilter::{FilterValidKeys, IntoValidKeys};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic; filtering any parsed document must agree
        if let Ok(doc) = Document::from_json(input) {
            let borrowed = doc.entries().filter_valid_keys();
            let owned = doc.into_entries().into_valid_keys();
            assert_eq!(borrowed, owned);
            assert!(borrowed.keys().all(|k| !k.is_empty()));
        }
    }
});
