use soap_client::SoapClient;

use crate::{Result, WemoOperation};

/// A client for executing WeMo operations against actual devices
///
/// This client bridges the gap between the stateless operation definitions
/// and actual network requests to WeMo switches. It uses the soap-client
/// crate to handle the underlying SOAP communication.
///
/// The client holds no mutable state; each call is an independent synchronous
/// request/response exchange, so a single client can be shared or cloned
/// across callers. Concurrent calls against the same device are serialized by
/// the device itself, not coordinated here.
#[derive(Debug, Clone)]
pub struct WemoClient {
    soap_client: SoapClient,
}

impl WemoClient {
    /// Create a new WeMo client with the default SOAP client configuration
    pub fn new() -> Self {
        Self {
            soap_client: SoapClient::new(),
        }
    }

    /// Create a WeMo client with a custom SOAP client (for advanced use cases)
    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    /// Execute a WeMo operation against a device
    ///
    /// Takes any operation that implements [`WemoOperation`], constructs the
    /// appropriate SOAP request, sends it to the device, and parses the
    /// response.
    ///
    /// # Arguments
    /// * `host` - Device address, `host` or `host:port`
    /// * `request` - The operation request data
    ///
    /// # Returns
    /// The parsed response data or an error
    ///
    /// # Example
    /// ```rust,no_run
    /// use wemo_api::WemoClient;
    /// use wemo_api::operations::{GetBinaryStateOperation, GetBinaryStateRequest};
    ///
    /// let client = WemoClient::new();
    /// let response = client.execute::<GetBinaryStateOperation>("192.168.1.42", &GetBinaryStateRequest)?;
    /// println!("switch is {}", response.state);
    /// # Ok::<(), wemo_api::ApiError>(())
    /// ```
    pub fn execute<Op: WemoOperation>(
        &self,
        host: &str,
        request: &Op::Request,
    ) -> Result<Op::Response> {
        let service_info = Op::SERVICE.info();
        let payload = Op::build_payload(request);

        let body = self.soap_client.call(
            host,
            service_info.endpoint,
            service_info.service_uri,
            Op::ACTION,
            &payload,
        )?;

        Op::parse_response(&body)
    }
}

impl Default for WemoClient {
    fn default() -> Self {
        Self::new()
    }
}
