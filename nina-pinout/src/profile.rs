//! Pin profile types
//!
//! A [`BoardPinProfile`] is the full set of host pins wired to the NINA
//! module for one board family.

use crate::error::PinoutError;
use crate::wiring::WiringOverride;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named NINA control or SPI signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Signal {
    /// Module auxiliary GPIO line
    NinaGpio0,
    /// Active-low module reset
    NinaResetn,
    /// Module ready/handshake line
    NinaAck,
    /// SPI chip-select
    SpiwifiSs,
    /// SPI channel acknowledge
    SpiwifiAck,
    /// SPI channel reset
    SpiwifiReset,
}

impl Signal {
    /// All signals
    pub const ALL: [Signal; 6] = [
        Self::NinaGpio0,
        Self::NinaResetn,
        Self::NinaAck,
        Self::SpiwifiSs,
        Self::SpiwifiAck,
        Self::SpiwifiReset,
    ];

    /// Constant name exported by board crates
    pub const fn name(self) -> &'static str {
        match self {
            Self::NinaGpio0 => "NINA_GPIO0",
            Self::NinaResetn => "NINA_RESETN",
            Self::NinaAck => "NINA_ACK",
            Self::SpiwifiSs => "SPIWIFI_SS",
            Self::SpiwifiAck => "SPIWIFI_ACK",
            Self::SpiwifiReset => "SPIWIFI_RESET",
        }
    }

    /// Key used in wiring files and as the profile field name
    pub const fn key(self) -> &'static str {
        match self {
            Self::NinaGpio0 => "nina_gpio0",
            Self::NinaResetn => "nina_resetn",
            Self::NinaAck => "nina_ack",
            Self::SpiwifiSs => "spiwifi_ss",
            Self::SpiwifiAck => "spiwifi_ack",
            Self::SpiwifiReset => "spiwifi_reset",
        }
    }

    /// Look up a signal by its wiring key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

/// Host pins wired to the NINA module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPinProfile {
    /// `NINA_GPIO0`
    pub nina_gpio0: u8,
    /// `NINA_RESETN`
    pub nina_resetn: u8,
    /// `NINA_ACK`
    pub nina_ack: u8,
    /// `SPIWIFI_SS`
    pub spiwifi_ss: u8,
    /// `SPIWIFI_ACK`
    pub spiwifi_ack: u8,
    /// `SPIWIFI_RESET`
    pub spiwifi_reset: u8,
    /// `PINS_COUNT`, for families that declare one
    pub pins_count: Option<u8>,
    /// Values are confirmed against real wiring
    pub verified: bool,
}

impl BoardPinProfile {
    /// Pin assigned to a signal
    pub const fn pin(&self, signal: Signal) -> u8 {
        match signal {
            Signal::NinaGpio0 => self.nina_gpio0,
            Signal::NinaResetn => self.nina_resetn,
            Signal::NinaAck => self.nina_ack,
            Signal::SpiwifiSs => self.spiwifi_ss,
            Signal::SpiwifiAck => self.spiwifi_ack,
            Signal::SpiwifiReset => self.spiwifi_reset,
        }
    }

    /// Apply a wiring override
    ///
    /// Overridden pins replace the defaults. `SPIWIFI_ACK` and `SPIWIFI_RESET`
    /// follow an overridden `NINA_ACK` / `NINA_RESETN` unless set themselves.
    /// A non-empty override marks the result as verified.
    pub const fn with_override(self, wiring: &WiringOverride) -> Self {
        if wiring.is_empty() {
            return self;
        }
        Self {
            nina_gpio0: pick(wiring.nina_gpio0, self.nina_gpio0),
            nina_resetn: pick(wiring.nina_resetn, self.nina_resetn),
            nina_ack: pick(wiring.nina_ack, self.nina_ack),
            spiwifi_ss: pick(wiring.spiwifi_ss, self.spiwifi_ss),
            spiwifi_ack: pick(
                wiring.spiwifi_ack,
                pick(wiring.nina_ack, self.spiwifi_ack),
            ),
            spiwifi_reset: pick(
                wiring.spiwifi_reset,
                pick(wiring.nina_resetn, self.spiwifi_reset),
            ),
            pins_count: self.pins_count,
            verified: true,
        }
    }

    /// Check the profile for wiring mistakes
    ///
    /// The SPI acknowledge and reset lines are the module's ACK and RESETN
    /// lines, the four distinct lines must not share a pin, and every pin
    /// must fit the declared pin count.
    pub const fn validate(&self) -> Result<(), PinoutError> {
        if self.spiwifi_ack != self.nina_ack {
            return Err(PinoutError::AckMismatch);
        }
        if self.spiwifi_reset != self.nina_resetn {
            return Err(PinoutError::ResetMismatch);
        }

        const DISTINCT: [Signal; 4] = [
            Signal::NinaGpio0,
            Signal::NinaResetn,
            Signal::NinaAck,
            Signal::SpiwifiSs,
        ];
        let mut i = 0;
        while i < DISTINCT.len() {
            let mut j = i + 1;
            while j < DISTINCT.len() {
                if self.pin(DISTINCT[i]) == self.pin(DISTINCT[j]) {
                    return Err(PinoutError::PinConflict {
                        first: DISTINCT[i],
                        second: DISTINCT[j],
                    });
                }
                j += 1;
            }
            i += 1;
        }

        if let Some(count) = self.pins_count {
            let mut k = 0;
            while k < Signal::ALL.len() {
                let signal = Signal::ALL[k];
                let pin = self.pin(signal);
                if pin >= count {
                    return Err(PinoutError::PinOutOfRange { signal, pin });
                }
                k += 1;
            }
        }

        Ok(())
    }
}

const fn pick(value: Option<u8>, default: u8) -> u8 {
    match value {
        Some(pin) => pin,
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: BoardPinProfile = BoardPinProfile {
        nina_gpio0: 26,
        nina_resetn: 27,
        nina_ack: 28,
        spiwifi_ss: 24,
        spiwifi_ack: 28,
        spiwifi_reset: 27,
        pins_count: Some(60),
        verified: false,
    };

    #[test]
    fn test_signal_keys() {
        for signal in Signal::ALL {
            assert_eq!(Signal::from_key(signal.key()), Some(signal));
        }
        assert_eq!(Signal::from_key("NINA_GPIO0"), None);
    }

    #[test]
    fn test_pin_lookup() {
        assert_eq!(BASE.pin(Signal::NinaGpio0), 26);
        assert_eq!(BASE.pin(Signal::SpiwifiSs), 24);
        assert_eq!(BASE.pin(Signal::SpiwifiReset), 27);
    }

    #[test]
    fn test_valid_profile() {
        assert_eq!(BASE.validate(), Ok(()));
    }

    #[test]
    fn test_ack_and_reset_must_follow_module_lines() {
        let mut p = BASE;
        p.spiwifi_ack = 5;
        assert_eq!(p.validate(), Err(PinoutError::AckMismatch));

        let mut p = BASE;
        p.spiwifi_reset = 5;
        assert_eq!(p.validate(), Err(PinoutError::ResetMismatch));
    }

    #[test]
    fn test_pin_conflict() {
        let mut p = BASE;
        p.spiwifi_ss = 26;
        assert_eq!(
            p.validate(),
            Err(PinoutError::PinConflict {
                first: Signal::NinaGpio0,
                second: Signal::SpiwifiSs,
            })
        );
    }

    #[test]
    fn test_pin_out_of_range() {
        let mut p = BASE;
        p.nina_gpio0 = 60;
        assert_eq!(
            p.validate(),
            Err(PinoutError::PinOutOfRange {
                signal: Signal::NinaGpio0,
                pin: 60,
            })
        );

        // No declared count, no range check
        p.pins_count = None;
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn test_empty_override_keeps_profile() {
        assert_eq!(BASE.with_override(&WiringOverride::NONE), BASE);
    }

    #[test]
    fn test_partial_override() {
        let wiring = WiringOverride {
            spiwifi_ss: Some(10),
            ..WiringOverride::NONE
        };
        let p = BASE.with_override(&wiring);
        assert_eq!(p.spiwifi_ss, 10);
        assert_eq!(p.nina_gpio0, 26);
        assert_eq!(p.pins_count, Some(60));
        assert!(p.verified);
    }

    #[test]
    fn test_spi_lines_follow_module_lines() {
        let wiring = WiringOverride {
            nina_ack: Some(7),
            nina_resetn: Some(6),
            ..WiringOverride::NONE
        };
        let p = BASE.with_override(&wiring);
        assert_eq!(p.spiwifi_ack, 7);
        assert_eq!(p.spiwifi_reset, 6);
        assert_eq!(p.validate(), Ok(()));

        // An explicit SPI line still wins
        let wiring = WiringOverride {
            nina_ack: Some(7),
            spiwifi_ack: Some(9),
            ..WiringOverride::NONE
        };
        let p = BASE.with_override(&wiring);
        assert_eq!(p.spiwifi_ack, 9);
        assert_eq!(p.validate(), Err(PinoutError::AckMismatch));
    }
}
