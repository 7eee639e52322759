//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use shoptrack_domain::ShopTrackError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShopTrackError);

impl From<InfraError> for ShopTrackError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShopTrackError> for InfraError {
    fn from(value: ShopTrackError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ShopTrackError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let classified = if err.is_timeout() {
            ShopTrackError::Network(format!("request timed out: {err}"))
        } else if err.is_connect() {
            ShopTrackError::Network(format!("connection failed: {err}"))
        } else if err.is_builder() {
            ShopTrackError::Config(format!("malformed request: {err}"))
        } else {
            ShopTrackError::Network(err.to_string())
        };
        InfraError(classified)
    }
}
