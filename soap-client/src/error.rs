//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur during SOAP communication
#[derive(Debug, Error)]
pub enum SoapError {
    /// No device host was supplied, so no request could be built
    #[error("Missing device host")]
    MissingHost,

    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),
}
