//! # WeMo SDK - control Belkin WeMo switches over UPnP
//!
//! Provides a small, sync-first API for querying and driving the on/off
//! state of WeMo switches through their `basicevent` SOAP service:
//!
//! ```rust,no_run
//! use wemo_sdk::{BinaryState, Switch};
//!
//! let switch = Switch::new("192.168.1.42:49153");
//!
//! let state = switch.get_state()?;
//! println!("switch is {}", state);
//!
//! switch.set_state(BinaryState::On)?;
//! let now_off = switch.toggle()?;
//! assert_eq!(now_off, BinaryState::Off);
//! # Ok::<(), wemo_sdk::SdkError>(())
//! ```
//!
//! A single-device deployment can address the switch through the
//! `WEMO_HOST` environment variable instead:
//!
//! ```rust,no_run
//! let switch = wemo_sdk::Switch::from_env()?;
//! println!("on: {}", switch.is_on()?);
//! # Ok::<(), wemo_sdk::SdkError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! wemo-sdk (Switch handle)
//!     ↓
//! wemo-api (typed basicevent operations)
//!     ↓
//! soap-client (SOAP envelope + HTTP exchange)
//! ```

// Main exports
pub use error::SdkError;
pub use switch::{Switch, WEMO_HOST_ENV};

// Re-export commonly used types from wemo-api
pub use wemo_api::{ApiError, BinaryState};

// Internal modules
mod error;
mod switch;
