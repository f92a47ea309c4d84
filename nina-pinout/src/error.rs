//! Pinout errors

use core::fmt;

use crate::profile::Signal;

/// Errors from resolving or validating a pin profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinoutError {
    /// No supported board family matched the target
    UnsupportedBoard,
    /// Board carries its own NINA wiring; nothing is defined here
    DeferredToNative,
    /// Symbol name is not a known target symbol
    UnknownSymbol,
    /// `SPIWIFI_ACK` differs from `NINA_ACK`
    AckMismatch,
    /// `SPIWIFI_RESET` differs from `NINA_RESETN`
    ResetMismatch,
    /// Two distinct signals share one pin
    PinConflict {
        /// First signal using the pin
        first: Signal,
        /// Second signal using the pin
        second: Signal,
    },
    /// Pin number is not below the declared pin count
    PinOutOfRange {
        /// Offending signal
        signal: Signal,
        /// Its pin number
        pin: u8,
    },
}

impl fmt::Display for PinoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBoard => f.write_str("no supported board family matched"),
            Self::DeferredToNative => f.write_str("board uses its native NINA wiring"),
            Self::UnknownSymbol => f.write_str("unknown target symbol"),
            Self::AckMismatch => f.write_str("SPIWIFI_ACK must equal NINA_ACK"),
            Self::ResetMismatch => f.write_str("SPIWIFI_RESET must equal NINA_RESETN"),
            Self::PinConflict { first, second } => write!(
                f,
                "{} and {} share the same pin",
                first.name(),
                second.name()
            ),
            Self::PinOutOfRange { signal, pin } => {
                write!(f, "{} pin {} exceeds the board pin count", signal.name(), pin)
            }
        }
    }
}
