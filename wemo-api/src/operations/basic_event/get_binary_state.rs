//! GetBinaryState operation for the basicevent service

use serde::{Deserialize, Serialize};

use crate::{ApiError, BinaryState, Service, WemoOperation};

const STATE_OPEN_TAG: &str = "<BinaryState>";
const STATE_CLOSE_TAG: &str = "</BinaryState>";

/// GetBinaryState operation
pub struct GetBinaryStateOperation;

/// Request for GetBinaryState operation
///
/// The action takes no parameters.
#[derive(Serialize)]
pub struct GetBinaryStateRequest;

/// Response for GetBinaryState operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetBinaryStateResponse {
    pub state: BinaryState,
}

impl WemoOperation for GetBinaryStateOperation {
    type Request = GetBinaryStateRequest;
    type Response = GetBinaryStateResponse;

    const SERVICE: Service = Service::BasicEvent;
    const ACTION: &'static str = "GetBinaryState";

    fn build_payload(_request: &Self::Request) -> String {
        String::new()
    }

    fn parse_response(body: &str) -> Result<Self::Response, ApiError> {
        let digit = find_state_digit(body).ok_or_else(|| ApiError::unexpected_response(body))?;
        // The scan anchors the digit to 0|1 already, but the numeric
        // conversion stays fallible rather than assumed.
        let value: u8 = digit
            .parse()
            .map_err(|_| ApiError::unexpected_response(body))?;
        let state =
            BinaryState::from_digit(value).ok_or_else(|| ApiError::unexpected_response(body))?;

        Ok(GetBinaryStateResponse { state })
    }
}

/// Find the first `<BinaryState>` element holding a single `0` or `1`
///
/// A tolerant scan over the raw body rather than a full XML parse. The
/// response element carries no namespace prefix, and state must still be
/// extractable from documents whose surrounding XML a strict parser would
/// reject.
fn find_state_digit(body: &str) -> Option<&str> {
    let mut remainder = body;
    while let Some(start) = remainder.find(STATE_OPEN_TAG) {
        let candidate = &remainder[start + STATE_OPEN_TAG.len()..];
        if (candidate.starts_with('0') || candidate.starts_with('1'))
            && candidate[1..].starts_with(STATE_CLOSE_TAG)
        {
            return Some(&candidate[..1]);
        }
        remainder = candidate;
    }
    None
}
