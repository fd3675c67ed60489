//! Switch handle for a single WeMo device

use std::env;

use tracing::debug;

use wemo_api::operations::{
    GetBinaryStateOperation, GetBinaryStateRequest, SetBinaryStateOperation, SetBinaryStateRequest,
};
use wemo_api::{BinaryState, WemoClient};

use crate::error::SdkError;

/// Environment variable consumed by [`Switch::from_env`]
pub const WEMO_HOST_ENV: &str = "WEMO_HOST";

/// Handle for a single WeMo switch
///
/// Holds the device address and a client. Every method is an independent
/// synchronous request/response exchange; the handle itself carries only
/// immutable configuration, so it can be cloned and shared across threads.
/// Concurrent calls against the same device are serialized by the device,
/// not coordinated here.
///
/// # Example
///
/// ```rust,no_run
/// use wemo_sdk::Switch;
///
/// let switch = Switch::new("192.168.1.42:49153");
/// if switch.is_on()? {
///     switch.turn_off()?;
/// }
/// # Ok::<(), wemo_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Switch {
    host: String,
    client: WemoClient,
}

impl Switch {
    /// Create a handle for the device at `host` (`host` or `host:port`)
    ///
    /// Explicit addressing is the preferred mode: one handle per device, any
    /// number of devices. The address is not validated beyond being used
    /// as-is; an empty address fails at call time with a transport error.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            client: WemoClient::new(),
        }
    }

    /// Create a handle with a custom client (for advanced configuration)
    pub fn with_client(host: impl Into<String>, client: WemoClient) -> Self {
        Self {
            host: host.into(),
            client,
        }
    }

    /// Create a handle for the single device named by `WEMO_HOST`
    ///
    /// Legacy single-device mode: the environment variable is resolved once,
    /// here, and the result is an ordinary handle; the core never reads
    /// process-wide state again. Fails with [`SdkError::MissingHost`] when
    /// the variable is unset or empty.
    pub fn from_env() -> Result<Self, SdkError> {
        match env::var(WEMO_HOST_ENV) {
            Ok(host) if !host.is_empty() => Ok(Self::new(host)),
            _ => Err(SdkError::MissingHost),
        }
    }

    /// The device address this handle controls
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Query the current state of the switch
    pub fn get_state(&self) -> Result<BinaryState, SdkError> {
        let response = self
            .client
            .execute::<GetBinaryStateOperation>(&self.host, &GetBinaryStateRequest)?;
        debug!(host = %self.host, state = %response.state, "queried switch state");
        Ok(response.state)
    }

    /// Set the switch to `state`
    ///
    /// A successful return means the device acknowledged the exchange. The
    /// resulting device state is not re-verified; firmware that acknowledges
    /// and then fails to switch is not detected.
    pub fn set_state(&self, state: BinaryState) -> Result<(), SdkError> {
        debug!(host = %self.host, state = %state, "setting switch state");
        self.client
            .execute::<SetBinaryStateOperation>(&self.host, &SetBinaryStateRequest { state })?;
        Ok(())
    }

    /// Whether the switch is currently on
    pub fn is_on(&self) -> Result<bool, SdkError> {
        Ok(self.get_state()?.is_on())
    }

    /// Turn the switch on
    pub fn turn_on(&self) -> Result<(), SdkError> {
        self.set_state(BinaryState::On)
    }

    /// Turn the switch off
    pub fn turn_off(&self) -> Result<(), SdkError> {
        self.set_state(BinaryState::Off)
    }

    /// Flip the switch and return the state that was written
    ///
    /// Reads the current state, then writes the opposite. The two steps are
    /// separate exchanges and the protocol offers no compare-and-swap, so a
    /// concurrent actor can change the device in between; the write then
    /// acts on stale information.
    pub fn toggle(&self) -> Result<BinaryState, SdkError> {
        let target = self.get_state()?.toggled();
        self.set_state(target)?;
        Ok(target)
    }
}
