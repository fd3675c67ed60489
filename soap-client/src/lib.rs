//! Private SOAP client for UPnP device communication
//!
//! This crate provides a minimal SOAP client specifically designed for
//! communicating with single-purpose UPnP devices like WeMo switches. It
//! builds the SOAP 1.1 envelope, performs the HTTP POST exchange, and hands
//! the raw response body back to the caller for interpretation.

mod error;

pub use error::SoapError;

use std::time::Duration;

/// A minimal SOAP client for UPnP device communication
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
}

impl SoapClient {
    /// Create a new SOAP client with default configuration
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// Send a SOAP action to a device and return the raw response body
    ///
    /// # Arguments
    /// * `host` - Device address, `host` or `host:port`
    /// * `endpoint` - Control endpoint path (e.g., "upnp/control/basicevent1")
    /// * `service_uri` - The UPnP service URI used in the envelope and header
    /// * `action` - The SOAP action name
    /// * `payload` - XML payload placed inside the action element
    ///
    /// # Returns
    /// The full response body as text. A non-2xx status is not treated as an
    /// error here: these devices report SOAP faults in the body, so the body
    /// is returned intact for the caller to interpret.
    pub fn call(
        &self,
        host: &str,
        endpoint: &str,
        service_uri: &str,
        action: &str,
        payload: &str,
    ) -> Result<String, SoapError> {
        if host.is_empty() {
            return Err(SoapError::MissingHost);
        }

        let body = envelope(service_uri, action, payload);
        let url = format!("http://{}/{}", host, endpoint);
        // The header value carries literal double quotes
        let soap_action = format!("\"{}#{}\"", service_uri, action);

        let response = self
            .agent
            .post(&url)
            .set("SOAPACTION", &soap_action)
            .set("Content-type", "text/xml")
            .send_string(&body);

        match response {
            Ok(response) => response
                .into_string()
                .map_err(|e| SoapError::Network(e.to_string())),
            Err(ureq::Error::Status(_, response)) => response
                .into_string()
                .map_err(|e| SoapError::Network(e.to_string())),
            Err(e) => Err(SoapError::Network(e.to_string())),
        }
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the SOAP 1.1 envelope carrying an action invocation
///
/// Pure string construction; the element and namespace names are exactly what
/// the device firmware expects.
fn envelope(service_uri: &str, action: &str, payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
  <s:Body>
    <u:{action} xmlns:u="{service_uri}">{payload}</u:{action}>
  </s:Body>
</s:Envelope>"#,
        action = action,
        service_uri = service_uri,
        payload = payload
    )
}
