//! Typed WeMo API for switch control over UPnP
//!
//! This crate provides a type-safe, trait-based API for controlling Belkin
//! WeMo switches. It uses the private `soap-client` crate for low-level SOAP
//! communication; each UPnP action of the `basicevent` service is modeled as
//! an operation with a typed request and response.
//!
//! ```rust,no_run
//! use wemo_api::{BinaryState, WemoClient};
//! use wemo_api::operations::{SetBinaryStateOperation, SetBinaryStateRequest};
//!
//! let client = WemoClient::new();
//! let request = SetBinaryStateRequest { state: BinaryState::On };
//! client.execute::<SetBinaryStateOperation>("192.168.1.42:49153", &request)?;
//! # Ok::<(), wemo_api::ApiError>(())
//! ```
//!
//! Most applications will want the higher-level `Switch` handle from the
//! `wemo-sdk` crate instead of driving operations directly.

pub mod client;
pub mod error;
pub mod operation;
pub mod operations;
pub mod service;
pub mod state;

pub use client::WemoClient;
pub use error::{ApiError, Result};
pub use operation::WemoOperation;
pub use service::{Service, ServiceInfo};
pub use state::BinaryState;
