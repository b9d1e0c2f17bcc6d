use serde::Serialize;

use super::normalize::split_vat_id;
use super::service::{PLACEHOLDER, VatCheckResult};

/// A VAT-ID together with its last validation outcome.
///
/// Fields are read-only from outside the crate: the country code and number are always
/// derived from the VAT-ID, and setting a new VAT-ID discards the previous outcome.
///
/// A record can be serialized for reporting but never deserialized, so every record
/// in existence came out of a validator:
///
/// ```compile_fail
/// let record: vatid::VatIdRecord = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VatIdRecord {
    pub(crate) vat_id: Option<String>,
    pub(crate) country_code: Option<String>,
    pub(crate) vat_number: Option<String>,
    pub(crate) is_valid: Option<bool>,
    pub(crate) company_name: Option<String>,
    pub(crate) company_address: Option<String>,
}

impl VatIdRecord {
    /// Record for an already normalized, non-empty VAT-ID. Not yet validated.
    pub(crate) fn for_id(vat_id: String) -> Self {
        let (country_code, vat_number) = split_vat_id(&vat_id);
        Self {
            country_code: Some(country_code.to_owned()),
            vat_number: Some(vat_number.to_owned()),
            vat_id: Some(vat_id),
            ..Self::default()
        }
    }

    /// Overwrite the validation outcome from a service answer.
    pub(crate) fn apply(&mut self, result: VatCheckResult) {
        self.is_valid = Some(result.valid);
        if result.valid {
            self.company_name = disclosed(result.name);
            self.company_address = disclosed(result.address);
        } else {
            self.company_name = None;
            self.company_address = None;
        }
    }

    /// The canonical VAT-ID, e.g. `DE273616207`.
    pub fn vat_id(&self) -> Option<&str> {
        self.vat_id.as_deref()
    }

    /// Two-character country prefix.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// Everything after the country prefix.
    pub fn vat_number(&self) -> Option<&str> {
        self.vat_number.as_deref()
    }

    /// `None` until the current VAT-ID has been validated.
    pub fn is_valid(&self) -> Option<bool> {
        self.is_valid
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    pub fn company_address(&self) -> Option<&str> {
        self.company_address.as_deref()
    }

    /// Whether no VAT-ID has been set.
    pub fn is_empty(&self) -> bool {
        self.vat_id.is_none()
    }
}

fn disclosed(value: String) -> Option<String> {
    Some(value).filter(|v| v != PLACEHOLDER && !v.is_empty())
}
