//! Integration tests for client operation execution
//!
//! These tests run the full request path (payload construction, SOAP
//! envelope, HTTP exchange, response parsing) against a local mock server
//! standing in for device firmware.

use mockito::{Matcher, Server};
use rstest::rstest;

use wemo_api::operations::{
    GetBinaryStateOperation, GetBinaryStateRequest, SetBinaryStateOperation, SetBinaryStateRequest,
};
use wemo_api::{ApiError, BinaryState, WemoClient};

const CONTROL_PATH: &str = "/upnp/control/basicevent1";
const GET_SOAP_ACTION: &str = "\"urn:Belkin:service:basicevent:1#GetBinaryState\"";
const SET_SOAP_ACTION: &str = "\"urn:Belkin:service:basicevent:1#SetBinaryState\"";

fn get_state_body(digit: char) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">
  <s:Body>
    <u:GetBinaryStateResponse xmlns:u="urn:Belkin:service:basicevent:1">
      <BinaryState>{digit}</BinaryState>
    </u:GetBinaryStateResponse>
  </s:Body>
</s:Envelope>"#
    )
}

const SOAP_FAULT_BODY: &str = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <s:Fault>
      <faultcode>s:Client</faultcode>
      <faultstring>UPnPError</faultstring>
      <detail>
        <UPnPError xmlns="urn:schemas-upnp-org:control-1-0">
          <errorCode>401</errorCode>
          <errorDescription>Invalid Action</errorDescription>
        </UPnPError>
      </detail>
    </s:Fault>
  </s:Body>
</s:Envelope>"#;

#[rstest]
#[case('0', BinaryState::Off)]
#[case('1', BinaryState::On)]
fn test_get_binary_state_exchange(#[case] digit: char, #[case] expected: BinaryState) {
    let mut server = Server::new();
    let mock = server
        .mock("POST", CONTROL_PATH)
        .match_header("SOAPACTION", GET_SOAP_ACTION)
        .match_header("Content-type", "text/xml")
        .match_body(Matcher::Regex(
            r#"<u:GetBinaryState xmlns:u="urn:Belkin:service:basicevent:1"></u:GetBinaryState>"#
                .to_string(),
        ))
        .with_status(200)
        .with_body(get_state_body(digit))
        .expect(1)
        .create();

    let client = WemoClient::new();
    let response = client
        .execute::<GetBinaryStateOperation>(&server.host_with_port(), &GetBinaryStateRequest)
        .unwrap();

    assert_eq!(response.state, expected);
    mock.assert();
}

#[test]
fn test_set_binary_state_exchange() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", CONTROL_PATH)
        .match_header("SOAPACTION", SET_SOAP_ACTION)
        .match_header("Content-type", "text/xml")
        .match_body(Matcher::Regex(
            "<BinaryState>1</BinaryState>".to_string(),
        ))
        .with_status(200)
        .with_body(get_state_body('1'))
        .expect(1)
        .create();

    let client = WemoClient::new();
    let request = SetBinaryStateRequest {
        state: BinaryState::On,
    };
    client
        .execute::<SetBinaryStateOperation>(&server.host_with_port(), &request)
        .unwrap();

    mock.assert();
}

#[test]
fn test_non_2xx_body_reaches_the_parser() {
    // Some firmware replies with an error status but a usable body; the
    // bytes must not be dropped on the floor
    let mut server = Server::new();
    let _mock = server
        .mock("POST", CONTROL_PATH)
        .with_status(500)
        .with_body(get_state_body('0'))
        .create();

    let client = WemoClient::new();
    let response = client
        .execute::<GetBinaryStateOperation>(&server.host_with_port(), &GetBinaryStateRequest)
        .unwrap();

    assert_eq!(response.state, BinaryState::Off);
}

#[test]
fn test_soap_fault_surfaces_as_unexpected_response() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", CONTROL_PATH)
        .with_status(500)
        .with_body(SOAP_FAULT_BODY)
        .create();

    let client = WemoClient::new();
    let result =
        client.execute::<GetBinaryStateOperation>(&server.host_with_port(), &GetBinaryStateRequest);

    match result {
        Err(ApiError::UnexpectedResponse(detail)) => {
            assert!(detail.contains("Invalid Action"));
        }
        other => panic!("Expected UnexpectedResponse, got {:?}", other.map(|r| r.state)),
    }
}

#[test]
fn test_unreachable_device_is_a_transport_error() {
    let client = WemoClient::new();
    // Port 1 is essentially never listening
    let result = client.execute::<GetBinaryStateOperation>("127.0.0.1:1", &GetBinaryStateRequest);

    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[test]
fn test_empty_host_fails_before_any_network_call() {
    let client = WemoClient::new();
    let result = client.execute::<GetBinaryStateOperation>("", &GetBinaryStateRequest);

    match result {
        Err(ApiError::Transport(msg)) => assert!(msg.contains("Missing device host")),
        other => panic!("Expected Transport error, got {:?}", other.map(|r| r.state)),
    }
}
