//! The seam between the validator and whatever transport reaches VIES.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder VIES uses for a name or address it will not disclose.
pub const PLACEHOLDER: &str = "---";

/// Raw answer of a `checkVat` call.
///
/// `name` and `address` are passed through as the service sent them, including the
/// [`PLACEHOLDER`]. Translating the placeholder is the validator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatCheckResult {
    /// Whether the VAT number is currently registered.
    pub valid: bool,
    /// Registered company name, or [`PLACEHOLDER`].
    pub name: String,
    /// Registered address, or [`PLACEHOLDER`].
    pub address: String,
    /// Date of the request as reported by the service (if any).
    pub request_date: Option<String>,
}

impl VatCheckResult {
    /// An answer with no company details.
    pub fn without_details(valid: bool) -> Self {
        Self {
            valid,
            name: PLACEHOLDER.into(),
            address: PLACEHOLDER.into(),
            request_date: None,
        }
    }
}

/// Error from the VIES transport.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ViesError {
    /// Network or HTTP error.
    Network(String),
    /// The VIES API returned an error (e.g. member state unavailable).
    ApiError(String),
    /// Failed to parse the response.
    ParseError(String),
    /// Invalid client configuration.
    Config(String),
}

impl fmt::Display for ViesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "VIES network error: {e}"),
            Self::ApiError(e) => write!(f, "VIES API error: {e}"),
            Self::ParseError(e) => write!(f, "VIES parse error: {e}"),
            Self::Config(e) => write!(f, "VIES configuration error: {e}"),
        }
    }
}

impl std::error::Error for ViesError {}

/// A client able to answer `checkVat` requests.
///
/// Calls block until the service answers; timeouts are the implementation's concern.
pub trait VatCheckService {
    /// Check `vat_number` (without prefix) registered in `country_code`.
    fn check_vat(&self, country_code: &str, vat_number: &str) -> Result<VatCheckResult, ViesError>;
}

impl<T: VatCheckService + ?Sized> VatCheckService for &T {
    fn check_vat(&self, country_code: &str, vat_number: &str) -> Result<VatCheckResult, ViesError> {
        (**self).check_vat(country_code, vat_number)
    }
}

impl<T: VatCheckService + ?Sized> VatCheckService for Box<T> {
    fn check_vat(&self, country_code: &str, vat_number: &str) -> Result<VatCheckResult, ViesError> {
        (**self).check_vat(country_code, vat_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl VatCheckService for AlwaysValid {
        fn check_vat(&self, _: &str, _: &str) -> Result<VatCheckResult, ViesError> {
            Ok(VatCheckResult::without_details(true))
        }
    }

    #[test]
    fn without_details_uses_placeholder() {
        let r = VatCheckResult::without_details(false);
        assert!(!r.valid);
        assert_eq!(r.name, PLACEHOLDER);
        assert_eq!(r.address, PLACEHOLDER);
    }

    fn check<S: VatCheckService>(svc: S) -> bool {
        svc.check_vat("DE", "273616207").unwrap().valid
    }

    #[test]
    fn service_usable_through_ref_and_box() {
        let svc = AlwaysValid;
        assert!(check(&svc));

        let boxed: Box<dyn VatCheckService> = Box::new(AlwaysValid);
        assert!(check(boxed));
    }

    #[test]
    fn vies_error_display() {
        let e = ViesError::Network("timeout".into());
        assert!(e.to_string().contains("timeout"));

        let e = ViesError::ApiError("MS_UNAVAILABLE".into());
        assert!(e.to_string().contains("MS_UNAVAILABLE"));

        let e = ViesError::ParseError("invalid json".into());
        assert!(e.to_string().contains("invalid json"));

        let e = ViesError::Config("VIES_TIMEOUT_SECS".into());
        assert!(e.to_string().starts_with("VIES configuration error"));
    }
}
