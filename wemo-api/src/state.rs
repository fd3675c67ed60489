//! Binary on/off state of a WeMo switch

use std::fmt;

use serde::{Deserialize, Serialize};

/// The state of a WeMo switch, either `Off` or `On`
///
/// The device represents this on the wire as the digit `0` or `1`; that
/// conversion happens only at the protocol boundary, via [`BinaryState::digit`]
/// and [`BinaryState::from_digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryState {
    Off,
    On,
}

impl BinaryState {
    /// The wire representation of this state
    pub fn digit(&self) -> char {
        match self {
            BinaryState::Off => '0',
            BinaryState::On => '1',
        }
    }

    /// Convert a wire digit back into a state
    ///
    /// Any value outside {0, 1} is rejected rather than admitted as a third
    /// state.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(BinaryState::Off),
            1 => Some(BinaryState::On),
            _ => None,
        }
    }

    /// Whether this state is `On`
    pub fn is_on(&self) -> bool {
        matches!(self, BinaryState::On)
    }

    /// The opposite state
    pub fn toggled(&self) -> Self {
        match self {
            BinaryState::Off => BinaryState::On,
            BinaryState::On => BinaryState::Off,
        }
    }
}

impl fmt::Display for BinaryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryState::Off => write!(f, "off"),
            BinaryState::On => write!(f, "on"),
        }
    }
}
