//! Literal pin table
//!
//! Every family except nRF52 shares the same placeholder values. None of
//! them has been confirmed on hardware, so all are marked unverified.

use crate::family::BoardFamily;
use crate::profile::BoardPinProfile;

/// Shared placeholder wiring (26/27/28, SS on 24)
const PLACEHOLDER: BoardPinProfile = BoardPinProfile {
    nina_gpio0: 26,
    nina_resetn: 27,
    nina_ack: 28,
    spiwifi_ss: 24,
    spiwifi_ack: 28,
    spiwifi_reset: 27,
    pins_count: None,
    verified: false,
};

const SAMD: BoardPinProfile = PLACEHOLDER;

// P0.26 / P0.25 / P0.24, SS on P0.16
const NRF52: BoardPinProfile = BoardPinProfile {
    nina_gpio0: 26,
    nina_resetn: 25,
    nina_ack: 24,
    spiwifi_ss: 16,
    spiwifi_ack: 24,
    spiwifi_reset: 25,
    pins_count: None,
    verified: false,
};

const AVR_MEGA: BoardPinProfile = BoardPinProfile {
    pins_count: Some(60),
    ..PLACEHOLDER
};

const TEENSY: BoardPinProfile = BoardPinProfile {
    pins_count: Some(60),
    ..PLACEHOLDER
};

const SAM3X8E: BoardPinProfile = PLACEHOLDER;

const STM32: BoardPinProfile = BoardPinProfile {
    pins_count: Some(60),
    ..PLACEHOLDER
};

/// Default pin profile for a family
pub const fn profile_for(family: BoardFamily) -> BoardPinProfile {
    match family {
        BoardFamily::Samd => SAMD,
        BoardFamily::Nrf52 => NRF52,
        BoardFamily::AvrMega => AVR_MEGA,
        BoardFamily::Teensy => TEENSY,
        BoardFamily::Sam3x8e => SAM3X8E,
        BoardFamily::Stm32 => STM32,
    }
}
