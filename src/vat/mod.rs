//! VAT-ID format checks and the VIES transport.
//!
//! The format check works offline. The VIES client (feature `vies`) implements
//! [`VatCheckService`](crate::core::VatCheckService) over the EU REST API.
//!
//! # Example
//!
//! ```ignore
//! use vatid::vat::*;
//!
//! // Format-only validation (no network)
//! assert!(validate_vat_format("DE273616207").is_ok());
//!
//! // VIES lookup (blocking, requires network)
//! let client = ViesClient::new(ViesConfig::from_env()?)?;
//! let result = client.check_vat("DE", "273616207")?;
//! ```

mod format;

#[cfg(feature = "vies")]
mod config;
#[cfg(feature = "vies")]
mod vies;

pub use format::{VatFormatError, is_vies_country_code, validate_vat_format};

#[cfg(feature = "vies")]
pub use config::{ENV_ENDPOINT, ENV_TIMEOUT_SECS, VIES_URL, ViesConfig};
#[cfg(feature = "vies")]
pub use vies::ViesClient;
