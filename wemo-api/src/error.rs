use soap_client::SoapError;
use thiserror::Error;

/// How much of a response body is carried in error detail
const BODY_DETAIL_LIMIT: usize = 512;

/// Errors surfaced by WeMo control operations
///
/// The two variants keep "device unreachable" and "device replied
/// unexpectedly" distinguishable, so callers and CLI wrappers can map them to
/// distinct error surfaces.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure
    ///
    /// The device host was missing, the network call failed (DNS, connection
    /// refused, timeout), or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The device responded, but no binary state could be extracted
    ///
    /// Covers SOAP fault bodies, malformed XML, and error pages served with a
    /// 200 status. Carries the response body (truncated) to aid diagnosis of
    /// device firmware differences.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// Build an `UnexpectedResponse` carrying a bounded copy of the body
    pub fn unexpected_response(body: &str) -> Self {
        ApiError::UnexpectedResponse(body.chars().take(BODY_DETAIL_LIMIT).collect())
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::MissingHost => ApiError::Transport(error.to_string()),
            SoapError::Network(msg) => ApiError::Transport(msg),
        }
    }
}
