//! EU VIES REST API client for VAT number validation.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::ViesConfig;
use crate::core::{PLACEHOLDER, VatCheckResult, VatCheckService, ViesError};

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest<'a> {
    country_code: String,
    vat_number: &'a str,
}

/// Blocking client for the VIES REST service.
///
/// Each [`check_vat`](VatCheckService::check_vat) call is one HTTP round trip; there is
/// no retry. The VIES API has no authentication, it is a free public service.
#[derive(Debug, Clone)]
pub struct ViesClient {
    http: Client,
    config: ViesConfig,
}

impl ViesClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// `ViesError::Network` if the underlying HTTP client cannot be built
    /// (e.g. no TLS backend available).
    pub fn new(config: ViesConfig) -> Result<Self, ViesError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ViesConfig {
        &self.config
    }
}

impl VatCheckService for ViesClient {
    /// Post a `checkVat` request to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ViesError::Network` on connection issues,
    /// `ViesError::ApiError` if a member state is unavailable,
    /// `ViesError::ParseError` on unexpected response formats.
    fn check_vat(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<VatCheckResult, ViesError> {
        let req = ViesRequest {
            country_code: country_code.to_uppercase(),
            vat_number,
        };
        debug!(
            endpoint = %self.config.endpoint,
            country_code = %req.country_code,
            "posting VIES request"
        );

        let resp = self
            .http
            .post(&self.config.endpoint)
            .json(&req)
            .send()
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().map_err(|e| ViesError::Network(e.to_string()))?;
        parse_response(status, &body)
    }
}

/// Turn an HTTP status and body into a raw check result.
///
/// Missing names and addresses come back as the placeholder, exactly as VIES
/// reports undisclosed details.
fn parse_response(status: StatusCode, body: &str) -> Result<VatCheckResult, ViesError> {
    if !status.is_success() {
        return Err(ViesError::ApiError(format!("HTTP {status}: {body}")));
    }

    let api_resp: ViesApiResponse = serde_json::from_str(body)
        .map_err(|e: serde_json::Error| ViesError::ParseError(e.to_string()))?;

    // Check for API-level errors
    if let Some(err) = api_resp.error_wrappers.as_deref().and_then(<[_]>::first) {
        let msg = err
            .message
            .clone()
            .or_else(|| err.error.clone())
            .unwrap_or_else(|| "unknown error".into());
        return Err(ViesError::ApiError(msg));
    }

    Ok(VatCheckResult {
        valid: api_resp.valid.unwrap_or(false),
        request_date: api_resp.request_date,
        name: api_resp.name.unwrap_or_else(|| PLACEHOLDER.into()),
        address: api_resp.address.unwrap_or_else(|| PLACEHOLDER.into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vies_request_serialization() {
        let req = ViesRequest {
            country_code: "DE".into(),
            vat_number: "273616207",
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"countryCode\":\"DE\""));
        assert!(json.contains("\"vatNumber\":\"273616207\""));
    }

    #[test]
    fn parses_valid_answer() {
        let body = r#"{"valid":true,"requestDate":"2024-01-15","name":"ACME GMBH","address":"MUSTERSTR 1\n10115 BERLIN"}"#;
        let r = parse_response(StatusCode::OK, body).unwrap();
        assert!(r.valid);
        assert_eq!(r.name, "ACME GMBH");
        assert_eq!(r.address, "MUSTERSTR 1\n10115 BERLIN");
        assert_eq!(r.request_date.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn placeholder_passes_through() {
        let body = r#"{"valid":false,"name":"---","address":"---"}"#;
        let r = parse_response(StatusCode::OK, body).unwrap();
        assert!(!r.valid);
        assert_eq!(r.name, PLACEHOLDER);
        assert_eq!(r.address, PLACEHOLDER);
    }

    #[test]
    fn missing_fields_become_placeholder() {
        let r = parse_response(StatusCode::OK, r#"{"name":null}"#).unwrap();
        assert!(!r.valid);
        assert_eq!(r.name, PLACEHOLDER);
        assert_eq!(r.address, PLACEHOLDER);
        assert_eq!(r.request_date, None);
    }

    #[test]
    fn error_wrapper_is_api_error() {
        let body = r#"{"actionSucceed":false,"errorWrappers":[{"error":"MS_UNAVAILABLE","message":"Member state unavailable"}]}"#;
        let err = parse_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ViesError::ApiError(ref m) if m == "Member state unavailable"));

        let body = r#"{"errorWrappers":[{"error":"INVALID_INPUT"}]}"#;
        let err = parse_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ViesError::ApiError(ref m) if m == "INVALID_INPUT"));
    }

    #[test]
    fn http_failure_is_api_error() {
        let err = parse_response(StatusCode::SERVICE_UNAVAILABLE, "busy").unwrap_err();
        assert!(matches!(err, ViesError::ApiError(_)));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn garbage_is_parse_error() {
        let err = parse_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ViesError::ParseError(_)));
    }

    #[test]
    fn client_builds_from_config() {
        let config = ViesConfig::default().endpoint("http://127.0.0.1:9/check");
        let client = ViesClient::new(config).unwrap();
        assert_eq!(client.config().endpoint, "http://127.0.0.1:9/check");
    }
}
