#![no_main]

use libfuzzer_sys::fuzz_target;
use vatid::{VatCheckResult, VatCheckService, VatIdValidator, ViesError};

struct Echo;

impl VatCheckService for Echo {
    fn check_vat(&self, country_code: &str, _: &str) -> Result<VatCheckResult, ViesError> {
        Ok(VatCheckResult::without_details(country_code == "DE"))
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let mut validator = VatIdValidator::new(Echo);
        if validator.set_id(s).is_ok() {
            let record = validator.extended();
            let joined = format!(
                "{}{}",
                record.country_code().unwrap_or_default(),
                record.vat_number().unwrap_or_default()
            );
            assert_eq!(record.vat_id(), Some(joined.as_str()));
            let _ = validator.is_valid();
        }
    }
});
