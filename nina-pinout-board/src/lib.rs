//! Compile-time NINA pin selection
//!
//! Enable one board family feature and this crate exports the pins the NINA
//! module is wired to:
//!
//! | Feature                     | Family         |
//! |-----------------------------|----------------|
//! | `samd`, `samd21`, `samd51`  | SAMD           |
//! | `nrf52`                     | nRF52          |
//! | `avr-mega`                  | Mega 2560/1280 |
//! | `teensy`                    | Teensy         |
//! | `sam3x8e`                   | SAM DUE        |
//! | `stm32`, `stm32f0` ... `stm32f7` | STM32     |
//!
//! `samd` and `stm32` are umbrellas for `samd21` and `stm32f4`.
//! If several families are enabled, the one listed first wins. Exported
//! constants: [`NINA_GPIO0`], [`NINA_RESETN`], [`NINA_ACK`], [`SPIWIFI_SS`],
//! [`SPIWIFI_ACK`], [`SPIWIFI_RESET`], [`PINS_COUNT`] and [`PROFILE`].
//!
//! Boards with an on-board NINA module (`nano-33-iot`, `mkr-wifi-1010`,
//! `mkr-vidor-4000`) export none of them; their core defines the pins.
//! Building without any family feature fails unless `no-board` is enabled.
//!
//! Family pins are unverified placeholders and the build warns about them.
//! Point `NINA_WIRING` at a TOML file with a `[wiring]` table to set the
//! actual pins:
//!
//! ```toml
//! [wiring]
//! nina_gpio0 = 5
//! nina_resetn = 6
//! nina_ack = 7
//! spiwifi_ss = 10
//! spiwifi_ack = 7
//! spiwifi_reset = 6
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

use cfg_if::cfg_if;

pub use nina_pinout::{
    BoardFamily, BoardPinProfile, PinoutError, Resolution, TargetSymbol, TargetSymbols,
    WiringOverride,
};

mod features;
pub use features::FEATURE_SYMBOLS;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/board.rs"));
}
pub use generated::{TARGET, WIRING, WIRING_SOURCE};

/// Resolution of the enabled features, before any wiring override
pub const ACTIVE: Resolution = nina_pinout::resolve(&TARGET);

macro_rules! export_profile {
    ($family:path) => {
        const _: () = assert!(
            matches!(ACTIVE, Resolution::Profile { family: $family, .. }),
            "board feature selection disagrees with the resolver"
        );

        /// Active pin profile with the wiring override applied
        pub const PROFILE: BoardPinProfile =
            nina_pinout::profile_for($family).with_override(&WIRING);

        const _: () = assert!(
            PROFILE.validate().is_ok(),
            "NINA wiring override is inconsistent"
        );

        /// Module auxiliary GPIO line
        pub const NINA_GPIO0: u8 = PROFILE.nina_gpio0;
        /// Active-low module reset
        pub const NINA_RESETN: u8 = PROFILE.nina_resetn;
        /// Module ready/handshake line
        pub const NINA_ACK: u8 = PROFILE.nina_ack;
        /// SPI chip-select
        pub const SPIWIFI_SS: u8 = PROFILE.spiwifi_ss;
        /// SPI acknowledge line
        pub const SPIWIFI_ACK: u8 = PROFILE.spiwifi_ack;
        /// SPI reset line
        pub const SPIWIFI_RESET: u8 = PROFILE.spiwifi_reset;
        /// Declared pin count of the family, if any
        pub const PINS_COUNT: Option<u8> = PROFILE.pins_count;
    };
}

cfg_if! {
    if #[cfg(any(feature = "samd21", feature = "samd51"))] {
        cfg_if! {
            if #[cfg(any(
                feature = "nano-33-iot",
                feature = "mkr-wifi-1010",
                feature = "mkr-vidor-4000",
                feature = "sam3x8e"
            ))] {
                // Native NINA wiring, nothing to export
                const _: () = assert!(
                    matches!(ACTIVE, Resolution::Deferred { .. }),
                    "board feature selection disagrees with the resolver"
                );
            } else {
                export_profile!(BoardFamily::Samd);
            }
        }
    } else if #[cfg(feature = "nrf52")] {
        export_profile!(BoardFamily::Nrf52);
    } else if #[cfg(feature = "avr-mega")] {
        export_profile!(BoardFamily::AvrMega);
    } else if #[cfg(feature = "teensy")] {
        export_profile!(BoardFamily::Teensy);
    } else if #[cfg(feature = "sam3x8e")] {
        export_profile!(BoardFamily::Sam3x8e);
    } else if #[cfg(any(
        feature = "stm32f0",
        feature = "stm32f1",
        feature = "stm32f2",
        feature = "stm32f3",
        feature = "stm32f4",
        feature = "stm32f7"
    ))] {
        export_profile!(BoardFamily::Stm32);
    } else if #[cfg(feature = "no-board")] {
        const _: () = assert!(
            matches!(ACTIVE, Resolution::Unmatched),
            "board feature selection disagrees with the resolver"
        );
    } else {
        compile_error!(
            "no board family feature selected: enable one of samd21, samd51, nrf52, \
             avr-mega, teensy, sam3x8e, stm32f0..stm32f7, or no-board"
        );
    }
}

/// Active profile with the wiring override applied, if this build has one
pub const fn active_profile() -> Option<BoardPinProfile> {
    match ACTIVE.profile() {
        Some(profile) => Some(profile.with_override(&WIRING)),
        None => None,
    }
}

/// Log the resolved NINA wiring
///
/// Placeholder pins and boards without a profile are logged as warnings.
pub fn log_active() {
    #[cfg(feature = "defmt")]
    log_resolution(ACTIVE, active_profile());
}

#[cfg(feature = "defmt")]
fn log_resolution(active: Resolution, profile: Option<BoardPinProfile>) {
    match (active, profile) {
        (Resolution::Profile { family, symbol, .. }, Some(p)) => {
            if p.verified {
                defmt::info!(
                    "NINA pins for {} ({}): gpio0={} resetn={} ack={} ss={}",
                    family.label(),
                    symbol.name(),
                    p.nina_gpio0,
                    p.nina_resetn,
                    p.nina_ack,
                    p.spiwifi_ss
                );
            } else {
                defmt::warn!(
                    "NINA pins for {} ({}) are unverified placeholders: gpio0={} resetn={} ack={} ss={}",
                    family.label(),
                    symbol.name(),
                    p.nina_gpio0,
                    p.nina_resetn,
                    p.nina_ack,
                    p.spiwifi_ss
                );
            }
        }
        (Resolution::Deferred { symbol, .. }, _) => {
            defmt::info!("NINA pins provided by the {} core", symbol.name());
        }
        _ => {
            defmt::warn!("no NINA pin profile for this build");
        }
    }
}
