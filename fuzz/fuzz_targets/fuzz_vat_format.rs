#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = vatid::vat::validate_vat_format(s);
        let _ = vatid::vat::validate_vat_format(&vatid::normalize_vat_id(s));
    }
});
