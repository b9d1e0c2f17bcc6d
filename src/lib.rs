//! # vatid
//!
//! EU VAT-ID validation against the VIES service.
//!
//! Raw user input is normalized (trimmed, stripped of spaces, hyphens, periods and
//! commas, uppercased), split into country code and number, and checked remotely on
//! demand. The validator holds one identifier at a time and caches the answer until
//! a new identifier is set.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatid::*;
//!
//! struct Fixed;
//!
//! impl VatCheckService for Fixed {
//!     fn check_vat(&self, _: &str, _: &str) -> Result<VatCheckResult, ViesError> {
//!         Ok(VatCheckResult {
//!             valid: true,
//!             name: "Ondango".into(),
//!             address: "---".into(),
//!             request_date: None,
//!         })
//!     }
//! }
//!
//! let validator = VatIdValidator::with_id(Fixed, "de 273-616.207").unwrap();
//! let record = validator.extended();
//! assert_eq!(record.country_code(), Some("DE"));
//! assert_eq!(record.is_valid(), Some(true));
//! assert_eq!(record.company_name(), Some("Ondango"));
//! assert_eq!(record.company_address(), None);
//! ```
//!
//! With the default `vies` feature, [`VatIdValidator::connect`] builds a validator
//! backed by the real VIES REST API.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `vies` (default) | Blocking VIES REST client and `connect*` constructors |

pub mod core;
pub mod vat;

// Re-export core types at crate root for convenience
pub use crate::core::*;
