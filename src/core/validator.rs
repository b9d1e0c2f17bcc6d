//! The VAT-ID validator: one record, one injected service.

use tracing::{debug, warn};

use super::error::VatIdError;
use super::normalize::normalize_vat_id;
use super::service::VatCheckService;
use super::types::VatIdRecord;

/// Holds a single VAT-ID and validates it against a [`VatCheckService`].
///
/// The record moves through three states: empty, set (not yet validated) and
/// validated. Setting a new VAT-ID always returns to "set". Use one validator per
/// identifier if several are checked in parallel.
///
/// ```
/// use vatid::{VatCheckResult, VatCheckService, VatIdValidator, ViesError};
///
/// struct Offline;
///
/// impl VatCheckService for Offline {
///     fn check_vat(&self, _: &str, _: &str) -> Result<VatCheckResult, ViesError> {
///         Ok(VatCheckResult::without_details(true))
///     }
/// }
///
/// let mut validator = VatIdValidator::new(Offline);
/// validator.set_id(" de-27,3616.207").unwrap();
/// assert_eq!(validator.id(), Some("DE273616207"));
/// assert!(validator.is_valid().unwrap());
/// ```
#[derive(Debug)]
pub struct VatIdValidator<C> {
    client: C,
    record: VatIdRecord,
}

impl<C: VatCheckService> VatIdValidator<C> {
    /// Create a validator with an empty record.
    pub fn new(client: C) -> Self {
        Self {
            client,
            record: VatIdRecord::default(),
        }
    }

    /// Create a validator, set `vat_id` and validate it right away.
    ///
    /// An empty `vat_id` is an error. A failing remote check is not: it is logged and
    /// the validator is returned with the VAT-ID set but not validated.
    pub fn with_id(client: C, vat_id: &str) -> Result<Self, VatIdError> {
        let mut validator = Self::new(client);
        validator.set_id(vat_id)?;
        if let Err(e) = validator.validate() {
            warn!(error = %e, "initial VAT-ID validation failed");
        }
        Ok(validator)
    }

    /// Set a new VAT-ID, discarding any previous validation outcome.
    ///
    /// The input is trimmed, stripped of spaces, hyphens, periods and commas, and
    /// uppercased. No format check happens here; malformed IDs are reported invalid
    /// by the service. On error the current record is left untouched.
    pub fn set_id(&mut self, raw: &str) -> Result<(), VatIdError> {
        let vat_id = normalize_vat_id(raw);
        if vat_id.is_empty() {
            return Err(VatIdError::InvalidInput("VAT-ID cannot be empty".into()));
        }
        self.record = VatIdRecord::for_id(vat_id);
        Ok(())
    }

    /// The current normalized VAT-ID.
    pub fn id(&self) -> Option<&str> {
        self.record.vat_id()
    }

    /// The current VAT-ID with its parts and validation outcome.
    pub fn extended(&self) -> &VatIdRecord {
        &self.record
    }

    /// Ask the service about the current VAT-ID.
    ///
    /// Blocks until the service answers. On failure the record keeps its previous
    /// outcome and the error is returned; the validator stays usable.
    pub fn validate(&mut self) -> Result<(), VatIdError> {
        let (Some(country_code), Some(vat_number)) =
            (self.record.country_code(), self.record.vat_number())
        else {
            return Err(VatIdError::InvalidInput("no VAT-ID set".into()));
        };

        debug!(country_code, vat_number, "checking VAT-ID");
        let result = self.client.check_vat(country_code, vat_number).map_err(|e| {
            warn!(country_code, vat_number, error = %e, "VAT-ID check failed");
            VatIdError::from(e)
        })?;
        debug!(valid = result.valid, request_date = ?result.request_date, "VAT-ID checked");

        self.record.apply(result);
        Ok(())
    }

    /// Whether the current VAT-ID is valid.
    ///
    /// **May call the service.** If the current VAT-ID has not been validated yet,
    /// this performs [`validate`](Self::validate) first, so the first call per
    /// VAT-ID can block and fail with [`VatIdError::RemoteCheckFailed`]. Later calls
    /// return the cached answer until [`set_id`](Self::set_id) is called again.
    pub fn is_valid(&mut self) -> Result<bool, VatIdError> {
        self.ensure_validated()
    }

    fn ensure_validated(&mut self) -> Result<bool, VatIdError> {
        if let Some(valid) = self.record.is_valid() {
            return Ok(valid);
        }
        self.validate()?;
        self.record
            .is_valid()
            .ok_or_else(|| VatIdError::InvalidInput("no VAT-ID set".into()))
    }

    /// The injected service client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Drop the validator, keeping the record.
    pub fn into_record(self) -> VatIdRecord {
        self.record
    }
}

#[cfg(feature = "vies")]
impl VatIdValidator<crate::vat::ViesClient> {
    /// Validator backed by the VIES REST service with default settings.
    ///
    /// # Errors
    ///
    /// [`VatIdError::ServiceUnavailable`] if the HTTP client cannot be built.
    pub fn connect() -> Result<Self, VatIdError> {
        Self::connect_with_config(crate::vat::ViesConfig::default())
    }

    /// Validator backed by the VIES REST service using `config`.
    pub fn connect_with_config(config: crate::vat::ViesConfig) -> Result<Self, VatIdError> {
        let client = crate::vat::ViesClient::new(config)
            .map_err(|e| VatIdError::ServiceUnavailable(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Like [`with_id`](Self::with_id), backed by the default VIES client.
    pub fn connect_with_id(vat_id: &str) -> Result<Self, VatIdError> {
        Self::connect_with_id_and_config(crate::vat::ViesConfig::default(), vat_id)
    }

    /// Like [`with_id`](Self::with_id), backed by a VIES client using `config`.
    ///
    /// Only a client that cannot be built is fatal; a failing first lookup is logged.
    pub fn connect_with_id_and_config(
        config: crate::vat::ViesConfig,
        vat_id: &str,
    ) -> Result<Self, VatIdError> {
        let validator = Self::connect_with_config(config)?;
        Self::with_id(validator.client, vat_id)
    }
}
