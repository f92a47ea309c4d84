//! Board families
//!
//! A family groups the target symbols that share one pin profile. The
//! variant order of [`BoardFamily`] is the selection precedence.

use crate::symbol::TargetSymbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SAMD: [TargetSymbol; 14] = [
    TargetSymbol::ArduinoSamdZero,
    TargetSymbol::ArduinoSamdMkr1000,
    TargetSymbol::ArduinoSamdMkrFox1200,
    TargetSymbol::ArduinoSamdMkrWan1300,
    TargetSymbol::ArduinoSamdMkrWan1310,
    TargetSymbol::ArduinoSamdMkrGsm1400,
    TargetSymbol::ArduinoSamdMkrNb1500,
    TargetSymbol::Samd21g18a,
    TargetSymbol::ArduinoSamdCircuitPlaygroundExpress,
    TargetSymbol::Samd21e18a,
    TargetSymbol::Samd51,
    TargetSymbol::Samd51j20a,
    TargetSymbol::Samd51j19a,
    TargetSymbol::Samd51g19a,
];

const NRF52: [TargetSymbol; 4] = [
    TargetSymbol::Nrf52840Feather,
    TargetSymbol::Nrf52832Feather,
    TargetSymbol::Nrf52Series,
    TargetSymbol::ArduinoNrf52Adafruit,
];

const AVR_MEGA: [TargetSymbol; 2] = [TargetSymbol::ArduinoAvrMega, TargetSymbol::ArduinoAvrMega2560];

const TEENSY: [TargetSymbol; 1] = [TargetSymbol::CoreTeensy];

const SAM3X8E: [TargetSymbol; 2] = [TargetSymbol::ArduinoSamDue, TargetSymbol::Sam3x8e];

const STM32: [TargetSymbol; 6] = [
    TargetSymbol::Stm32f0,
    TargetSymbol::Stm32f1,
    TargetSymbol::Stm32f2,
    TargetSymbol::Stm32f3,
    TargetSymbol::Stm32f4,
    TargetSymbol::Stm32f7,
];

/// Boards that carry their own NINA wiring
///
/// When any of these is defined alongside a SAMD symbol, the SAMD family
/// defines nothing. Note that the SAM3X8E symbols are listed here as well
/// as forming their own family.
pub const NATIVE_NINA: [TargetSymbol; 5] = [
    TargetSymbol::ArduinoSamdNano33Iot,
    TargetSymbol::ArduinoSamdMkrWifi1010,
    TargetSymbol::ArduinoSamdMkrVidor4000,
    TargetSymbol::ArduinoSamDue,
    TargetSymbol::Sam3x8e,
];

/// Supported board family, in selection precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardFamily {
    /// SAMD21 / SAMD51 boards
    Samd,
    /// nRF52832 / nRF52840 boards
    Nrf52,
    /// Arduino Mega 1280 / 2560
    AvrMega,
    /// Teensy core
    Teensy,
    /// SAM3X8E (Arduino Due)
    Sam3x8e,
    /// STM32F0 - STM32F7
    Stm32,
}

impl BoardFamily {
    /// All families, highest precedence first
    pub const PRECEDENCE: [BoardFamily; 6] = [
        Self::Samd,
        Self::Nrf52,
        Self::AvrMega,
        Self::Teensy,
        Self::Sam3x8e,
        Self::Stm32,
    ];

    /// Symbols that select this family
    pub const fn symbols(self) -> &'static [TargetSymbol] {
        match self {
            Self::Samd => &SAMD,
            Self::Nrf52 => &NRF52,
            Self::AvrMega => &AVR_MEGA,
            Self::Teensy => &TEENSY,
            Self::Sam3x8e => &SAM3X8E,
            Self::Stm32 => &STM32,
        }
    }

    /// Short identifier
    pub const fn name(self) -> &'static str {
        match self {
            Self::Samd => "samd",
            Self::Nrf52 => "nrf52",
            Self::AvrMega => "avr-mega",
            Self::Teensy => "teensy",
            Self::Sam3x8e => "sam3x8e",
            Self::Stm32 => "stm32",
        }
    }

    /// Label used in wiring warnings
    pub const fn label(self) -> &'static str {
        match self {
            Self::Samd => "SAMD",
            Self::Nrf52 => "NRF528XX",
            Self::AvrMega => "Mega 2560/1280",
            Self::Teensy => "Teensy",
            Self::Sam3x8e => "SAM DUE",
            Self::Stm32 => "STM32",
        }
    }

    /// Family whose symbol list contains `symbol`, if any
    ///
    /// Returns the highest-precedence family; carve-out boards such as the
    /// Nano 33 IoT belong to no family.
    pub fn of(symbol: TargetSymbol) -> Option<Self> {
        Self::PRECEDENCE
            .iter()
            .copied()
            .find(|family| family.symbols().contains(&symbol))
    }
}
