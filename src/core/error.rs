use thiserror::Error;

use super::service::ViesError;

/// Errors that can occur while setting or validating a VAT-ID.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VatIdError {
    /// The validation service client could not be established.
    ///
    /// Only returned while constructing a validator; no validator exists afterwards.
    #[error("validation service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The supplied identifier is unusable (empty after normalization, or missing).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The remote check failed. The record is left as it was before the call.
    #[error("remote check failed: {0}")]
    RemoteCheckFailed(#[from] ViesError),
}

impl VatIdError {
    /// Whether the caller can keep using the validator after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let e = VatIdError::InvalidInput("VAT-ID cannot be empty".into());
        assert_eq!(e.to_string(), "invalid input: VAT-ID cannot be empty");

        let e = VatIdError::from(ViesError::Network("connection reset".into()));
        assert!(e.to_string().contains("connection reset"));
        assert!(matches!(e, VatIdError::RemoteCheckFailed(_)));
    }

    #[test]
    fn only_service_unavailable_is_fatal() {
        assert!(!VatIdError::ServiceUnavailable("wsdl".into()).is_recoverable());
        assert!(VatIdError::InvalidInput("x".into()).is_recoverable());
        let remote = ViesError::ApiError("MS_UNAVAILABLE".into());
        assert!(VatIdError::RemoteCheckFailed(remote).is_recoverable());
    }
}
