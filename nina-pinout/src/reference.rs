//! Reference wiring for boards with an on-board NINA module
//!
//! These boards are never resolved to a profile (see the SAMD carve-out);
//! their core already defines the pins. The Nano 33 IoT variant is kept here
//! as data for host-side tooling and for comparing custom wiring against.
//!
//! ```text
//! pin  port  signal
//! 22   PA12  NINA_MOSI   (SPI1)
//! 23   PA13  NINA_MISO   (SPI1)
//! 24   PA14  NINA_CS     (SPI1 SS)
//! 25   PA15  NINA_SCK    (SPI1)
//! 26   PA27  NINA_GPIO0
//! 27   PA08  NINA_RESETN
//! 28   PA28  NINA_ACK
//! ```

use crate::profile::BoardPinProfile;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete native NINA wiring, including the SPI data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeWiring {
    /// Module auxiliary GPIO line
    pub nina_gpio0: u8,
    /// Active-low module reset
    pub nina_resetn: u8,
    /// Module ready/handshake line
    pub nina_ack: u8,
    /// SPI data in (host side)
    pub spi_miso: u8,
    /// SPI data out (host side)
    pub spi_mosi: u8,
    /// SPI clock
    pub spi_sck: u8,
    /// SPI chip-select
    pub spi_ss: u8,
    /// Total digital pins on the board
    pub digital_pins: u8,
    /// Analog input channels
    pub analog_inputs: u8,
    /// Analog output (DAC) channels
    pub analog_outputs: u8,
}

impl NativeWiring {
    /// Control-line profile; `SPIWIFI_*` follow the SPI SS, ACK and RESETN lines
    pub const fn as_profile(&self) -> BoardPinProfile {
        BoardPinProfile {
            nina_gpio0: self.nina_gpio0,
            nina_resetn: self.nina_resetn,
            nina_ack: self.nina_ack,
            spiwifi_ss: self.spi_ss,
            spiwifi_ack: self.nina_ack,
            spiwifi_reset: self.nina_resetn,
            pins_count: Some(self.digital_pins),
            verified: true,
        }
    }
}

/// Arduino Nano 33 IoT
pub const NANO_33_IOT: NativeWiring = NativeWiring {
    nina_gpio0: 26,
    nina_resetn: 27,
    nina_ack: 28,
    spi_miso: 23,
    spi_mosi: 22,
    spi_sck: 25,
    spi_ss: 24,
    digital_pins: 31,
    analog_inputs: 8,
    analog_outputs: 1,
};
