use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::service::Service;

/// Base trait for all WeMo API operations
///
/// Defines the common interface every UPnP action must implement: which
/// service it belongs to, how its payload is built, and how its response body
/// is interpreted. Operations are stateless; a [`crate::WemoClient`] bridges
/// them to actual devices.
pub trait WemoOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The response type for this operation, must be deserializable
    type Response: for<'de> Deserialize<'de>;

    /// The UPnP service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Build the SOAP payload from the request data
    ///
    /// Returns the XML fragment that goes inside the action element of the
    /// SOAP envelope, without the envelope itself. Pure string construction;
    /// no error conditions.
    fn build_payload(request: &Self::Request) -> String;

    /// Parse the raw response body into the typed response
    ///
    /// Receives the full body exactly as the device sent it, including bodies
    /// returned with non-2xx statuses, so SOAP fault documents reach the
    /// parser rather than being dropped.
    fn parse_response(body: &str) -> Result<Self::Response, ApiError>;
}
