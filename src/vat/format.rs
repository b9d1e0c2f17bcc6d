//! Offline VAT-ID format checks for the VIES member states.
//!
//! These never touch the network. The validator does not call them; they let a
//! caller skip a remote lookup that is bound to come back invalid.

use std::fmt;

/// Error returned when a VAT-ID fails the offline format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatFormatError {
    /// The rejected input.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl fmt::Display for VatFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid VAT ID '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for VatFormatError {}

type NumberCheck = fn(&str) -> bool;

fn digits(n: &str) -> bool {
    n.bytes().all(|b| b.is_ascii_digit())
}

fn alnum(n: &str) -> bool {
    n.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Number patterns per VIES country prefix, sorted by prefix.
static PATTERNS: &[(&str, NumberCheck)] = &[
    ("AT", |n| n.len() == 9 && n.starts_with('U') && digits(&n[1..])),
    ("BE", |n| n.len() == 10 && digits(n)),
    ("BG", |n| (9..=10).contains(&n.len()) && digits(n)),
    ("CY", |n| n.len() == 9 && digits(&n[..8]) && n.as_bytes()[8].is_ascii_alphabetic()),
    ("CZ", |n| (8..=10).contains(&n.len()) && digits(n)),
    ("DE", |n| n.len() == 9 && digits(n) && !n.starts_with('0')),
    ("DK", |n| n.len() == 8 && digits(n)),
    ("EE", |n| n.len() == 9 && digits(n)),
    ("EL", |n| n.len() == 9 && digits(n)),
    ("ES", |n| n.len() == 9 && alnum(n)),
    ("FI", |n| n.len() == 8 && digits(n)),
    ("FR", |n| n.len() == 11 && alnum(&n[..2]) && digits(&n[2..])),
    ("HR", |n| n.len() == 11 && digits(n)),
    ("HU", |n| n.len() == 8 && digits(n)),
    ("IE", |n| (8..=9).contains(&n.len()) && alnum(n)),
    ("IT", |n| n.len() == 11 && digits(n)),
    ("LT", |n| (n.len() == 9 || n.len() == 12) && digits(n)),
    ("LU", |n| n.len() == 8 && digits(n)),
    ("LV", |n| n.len() == 11 && digits(n)),
    ("MT", |n| n.len() == 8 && digits(n)),
    ("NL", |n| {
        n.len() == 12 && digits(&n[..9]) && n.as_bytes()[9] == b'B' && digits(&n[10..])
    }),
    ("PL", |n| n.len() == 10 && digits(n)),
    ("PT", |n| n.len() == 9 && digits(n)),
    ("RO", |n| (2..=10).contains(&n.len()) && digits(n)),
    ("SE", |n| n.len() == 12 && digits(n)),
    ("SI", |n| n.len() == 8 && digits(n)),
    ("SK", |n| n.len() == 10 && digits(n)),
    // Northern Ireland, GB number format
    ("XI", |n| n.len() == 9 && digits(n)),
];

fn pattern_for(code: &str) -> Option<NumberCheck> {
    PATTERNS
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| PATTERNS[i].1)
}

/// Whether `code` is a country prefix VIES answers for (`EL` for Greece, `XI` for
/// Northern Ireland). Expects uppercase.
pub fn is_vies_country_code(code: &str) -> bool {
    pattern_for(code).is_some()
}

/// Check a VAT-ID against its member state's number format (no network call).
///
/// The input must carry the 2-letter country prefix, e.g. `DE123456789`. Surrounding
/// whitespace is ignored and letters match in either case. Returns the
/// `(country_code, number)` split on success, sliced from the input as given; pass
/// the output of [`normalize_vat_id`](crate::normalize_vat_id) to get canonical parts.
pub fn validate_vat_format(vat_id: &str) -> Result<(&str, &str), VatFormatError> {
    let vat_id = vat_id.trim();
    let reject = |reason: String| VatFormatError {
        value: vat_id.into(),
        reason,
    };

    if vat_id.len() < 4 || !vat_id.is_ascii() {
        return Err(reject("must be at least 4 ASCII characters".into()));
    }

    let (country, number) = vat_id.split_at(2);
    let country_upper = country.to_ascii_uppercase();
    match pattern_for(&country_upper) {
        Some(check) if check(&number.to_ascii_uppercase()) => Ok((country, number)),
        Some(_) => Err(reject(format!("invalid format for country {country_upper}"))),
        None => Err(reject(format!("unknown country code '{country}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_sorted_for_binary_search() {
        for window in PATTERNS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "patterns not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn valid_de_vat() {
        let (cc, num) = validate_vat_format("DE273616207").unwrap();
        assert_eq!(cc, "DE");
        assert_eq!(num, "273616207");
    }

    #[test]
    fn valid_other_member_states() {
        for id in [
            "ATU12345678",
            "FR12345678901",
            "NL123456789B01",
            "IT12345678901",
            "ESX1234567X",
            "PL1234567890",
            "CY12345678L",
            "XI123456789",
        ] {
            assert!(validate_vat_format(id).is_ok(), "{id} should pass");
        }
    }

    #[test]
    fn de_vat_leading_zero_rejected() {
        assert!(validate_vat_format("DE012345678").is_err());
    }

    #[test]
    fn trailing_garbage_rejected() {
        let err = validate_vat_format("DE273616207XXX").unwrap_err();
        assert!(err.reason.contains("DE"));
    }

    #[test]
    fn unknown_country() {
        let err = validate_vat_format("XX12345678").unwrap_err();
        assert!(err.reason.contains("unknown country"));
    }

    #[test]
    fn lowercase_input_accepted_as_given() {
        assert_eq!(validate_vat_format("de273616207").unwrap(), ("de", "273616207"));
        assert_eq!(validate_vat_format("atu12345678").unwrap(), ("at", "u12345678"));
        assert!(validate_vat_format("nl123456789b01").is_ok());
        assert!(validate_vat_format("cy12345678l").is_ok());
    }

    #[test]
    fn too_short_or_non_ascii() {
        assert!(validate_vat_format("DE").is_err());
        assert!(validate_vat_format("DÄ12345").is_err());
    }

    #[test]
    fn vies_country_codes() {
        assert!(is_vies_country_code("DE"));
        assert!(is_vies_country_code("EL"));
        assert!(is_vies_country_code("XI"));
        assert!(!is_vies_country_code("GR"));
        assert!(!is_vies_country_code("GB"));
        assert!(!is_vies_country_code("de"));
    }
}
