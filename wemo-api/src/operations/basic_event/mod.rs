//! Operations for the Belkin basicevent service

mod get_binary_state;
mod set_binary_state;

pub use get_binary_state::{GetBinaryStateOperation, GetBinaryStateRequest, GetBinaryStateResponse};
pub use set_binary_state::{SetBinaryStateOperation, SetBinaryStateRequest, SetBinaryStateResponse};
