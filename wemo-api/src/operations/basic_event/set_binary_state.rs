//! SetBinaryState operation for the basicevent service

use serde::{Deserialize, Serialize};

use crate::{ApiError, BinaryState, Service, WemoOperation};

/// SetBinaryState operation
pub struct SetBinaryStateOperation;

/// Request for SetBinaryState operation
#[derive(Serialize)]
pub struct SetBinaryStateRequest {
    pub state: BinaryState,
}

/// Response for SetBinaryState operation
///
/// The device acknowledgment carries no information this crate consumes: a
/// successful exchange is the acknowledgment, and the resulting device state
/// is not re-verified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetBinaryStateResponse;

impl WemoOperation for SetBinaryStateOperation {
    type Request = SetBinaryStateRequest;
    type Response = SetBinaryStateResponse;

    const SERVICE: Service = Service::BasicEvent;
    const ACTION: &'static str = "SetBinaryState";

    fn build_payload(request: &Self::Request) -> String {
        format!("<BinaryState>{}</BinaryState>", request.state.digit())
    }

    fn parse_response(_body: &str) -> Result<Self::Response, ApiError> {
        Ok(SetBinaryStateResponse)
    }
}
