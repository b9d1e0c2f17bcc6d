//! VAT-ID normalization, the validation record and the validator.
//!
//! Nothing in here talks to the network; the validator reaches VIES only through
//! the [`VatCheckService`] it is given.

mod error;
mod normalize;
mod service;
mod types;
mod validator;

pub use error::*;
pub use normalize::{normalize_vat_id, split_vat_id};
pub use service::*;
pub use types::*;
pub use validator::*;
