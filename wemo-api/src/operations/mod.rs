//! Typed operations grouped by UPnP service

pub mod basic_event;

pub use basic_event::{
    GetBinaryStateOperation, GetBinaryStateRequest, GetBinaryStateResponse, SetBinaryStateOperation,
    SetBinaryStateRequest, SetBinaryStateResponse,
};
