//! Target symbols
//!
//! A target symbol identifies the board or MCU a build is compiled for,
//! the way the Arduino toolchain defines e.g. `ARDUINO_AVR_MEGA2560` or
//! `__SAMD51__`. Board crates turn their cargo features into a
//! [`TargetSymbols`] set and hand it to the resolver.

use crate::error::PinoutError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Known target-identifying symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TargetSymbol {
    // SAMD21 / SAMD51
    ArduinoSamdZero,
    ArduinoSamdMkr1000,
    ArduinoSamdMkrFox1200,
    ArduinoSamdMkrWan1300,
    ArduinoSamdMkrWan1310,
    ArduinoSamdMkrGsm1400,
    ArduinoSamdMkrNb1500,
    Samd21g18a,
    ArduinoSamdCircuitPlaygroundExpress,
    Samd21e18a,
    Samd51,
    Samd51j20a,
    Samd51j19a,
    Samd51g19a,
    // Boards with an on-board NINA module
    ArduinoSamdNano33Iot,
    ArduinoSamdMkrWifi1010,
    ArduinoSamdMkrVidor4000,
    // SAM3X8E
    ArduinoSamDue,
    Sam3x8e,
    // nRF52
    Nrf52840Feather,
    Nrf52832Feather,
    Nrf52Series,
    ArduinoNrf52Adafruit,
    // AVR
    ArduinoAvrMega,
    ArduinoAvrMega2560,
    // Teensy
    CoreTeensy,
    // STM32
    Stm32f0,
    Stm32f1,
    Stm32f2,
    Stm32f3,
    Stm32f4,
    Stm32f7,
}

impl TargetSymbol {
    /// Every known symbol, in declaration order
    pub const ALL: [TargetSymbol; 32] = [
        Self::ArduinoSamdZero,
        Self::ArduinoSamdMkr1000,
        Self::ArduinoSamdMkrFox1200,
        Self::ArduinoSamdMkrWan1300,
        Self::ArduinoSamdMkrWan1310,
        Self::ArduinoSamdMkrGsm1400,
        Self::ArduinoSamdMkrNb1500,
        Self::Samd21g18a,
        Self::ArduinoSamdCircuitPlaygroundExpress,
        Self::Samd21e18a,
        Self::Samd51,
        Self::Samd51j20a,
        Self::Samd51j19a,
        Self::Samd51g19a,
        Self::ArduinoSamdNano33Iot,
        Self::ArduinoSamdMkrWifi1010,
        Self::ArduinoSamdMkrVidor4000,
        Self::ArduinoSamDue,
        Self::Sam3x8e,
        Self::Nrf52840Feather,
        Self::Nrf52832Feather,
        Self::Nrf52Series,
        Self::ArduinoNrf52Adafruit,
        Self::ArduinoAvrMega,
        Self::ArduinoAvrMega2560,
        Self::CoreTeensy,
        Self::Stm32f0,
        Self::Stm32f1,
        Self::Stm32f2,
        Self::Stm32f3,
        Self::Stm32f4,
        Self::Stm32f7,
    ];

    /// Canonical symbol name as defined by the board toolchain
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArduinoSamdZero => "ARDUINO_SAMD_ZERO",
            Self::ArduinoSamdMkr1000 => "ARDUINO_SAMD_MKR1000",
            Self::ArduinoSamdMkrFox1200 => "ARDUINO_SAMD_MKRFox1200",
            Self::ArduinoSamdMkrWan1300 => "ARDUINO_SAMD_MKRWAN1300",
            Self::ArduinoSamdMkrWan1310 => "ARDUINO_SAMD_MKRWAN1310",
            Self::ArduinoSamdMkrGsm1400 => "ARDUINO_SAMD_MKRGSM1400",
            Self::ArduinoSamdMkrNb1500 => "ARDUINO_SAMD_MKRNB1500",
            Self::Samd21g18a => "__SAMD21G18A__",
            Self::ArduinoSamdCircuitPlaygroundExpress => "ARDUINO_SAMD_CIRCUITPLAYGROUND_EXPRESS",
            Self::Samd21e18a => "__SAMD21E18A__",
            Self::Samd51 => "__SAMD51__",
            Self::Samd51j20a => "__SAMD51J20A__",
            Self::Samd51j19a => "__SAMD51J19A__",
            Self::Samd51g19a => "__SAMD51G19A__",
            Self::ArduinoSamdNano33Iot => "ARDUINO_SAMD_NANO_33_IOT",
            Self::ArduinoSamdMkrWifi1010 => "ARDUINO_SAMD_MKRWIFI1010",
            Self::ArduinoSamdMkrVidor4000 => "ARDUINO_SAMD_MKRVIDOR4000",
            Self::ArduinoSamDue => "ARDUINO_SAM_DUE",
            Self::Sam3x8e => "__SAM3X8E__",
            Self::Nrf52840Feather => "NRF52840_FEATHER",
            Self::Nrf52832Feather => "NRF52832_FEATHER",
            Self::Nrf52Series => "NRF52_SERIES",
            Self::ArduinoNrf52Adafruit => "ARDUINO_NRF52_ADAFRUIT",
            Self::ArduinoAvrMega => "ARDUINO_AVR_MEGA",
            Self::ArduinoAvrMega2560 => "ARDUINO_AVR_MEGA2560",
            Self::CoreTeensy => "CORE_TEENSY",
            Self::Stm32f0 => "STM32F0",
            Self::Stm32f1 => "STM32F1",
            Self::Stm32f2 => "STM32F2",
            Self::Stm32f3 => "STM32F3",
            Self::Stm32f4 => "STM32F4",
            Self::Stm32f7 => "STM32F7",
        }
    }

    /// Look up a symbol by its canonical name (case-sensitive)
    pub fn from_name(name: &str) -> Result<Self, PinoutError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or(PinoutError::UnknownSymbol)
    }

    const fn bit(self) -> u64 {
        1 << (self as u8)
    }
}

/// Set of target symbols defined for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TargetSymbols {
    bits: u64,
}

impl TargetSymbols {
    /// Create an empty set
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Create a set from a slice of symbols
    pub const fn from_slice(symbols: &[TargetSymbol]) -> Self {
        let mut set = Self::empty();
        let mut i = 0;
        while i < symbols.len() {
            set = set.with(symbols[i]);
            i += 1;
        }
        set
    }

    /// Return the set with `symbol` added
    pub const fn with(self, symbol: TargetSymbol) -> Self {
        Self {
            bits: self.bits | symbol.bit(),
        }
    }

    /// Add a symbol
    pub fn insert(&mut self, symbol: TargetSymbol) {
        self.bits |= symbol.bit();
    }

    /// Check whether a symbol is defined
    pub const fn contains(&self, symbol: TargetSymbol) -> bool {
        self.bits & symbol.bit() != 0
    }

    /// First symbol of `candidates` (in slice order) present in the set
    pub const fn first_of(&self, candidates: &[TargetSymbol]) -> Option<TargetSymbol> {
        let mut i = 0;
        while i < candidates.len() {
            if self.contains(candidates[i]) {
                return Some(candidates[i]);
            }
            i += 1;
        }
        None
    }

    /// Number of defined symbols
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Check if no symbol is defined
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over the defined symbols in declaration order
    pub fn iter(&self) -> impl Iterator<Item = TargetSymbol> + '_ {
        TargetSymbol::ALL
            .into_iter()
            .filter(move |s| self.contains(*s))
    }

    /// Build a set from canonical symbol names
    ///
    /// Fails on the first name that is not a known symbol.
    pub fn parse<'a, I>(names: I) -> Result<Self, PinoutError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::empty();
        for name in names {
            set.insert(TargetSymbol::from_name(name.trim())?);
        }
        Ok(set)
    }
}

impl FromIterator<TargetSymbol> for TargetSymbols {
    fn from_iter<T: IntoIterator<Item = TargetSymbol>>(iter: T) -> Self {
        let mut set = Self::empty();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip_through_lookup() {
        for symbol in TargetSymbol::ALL {
            assert_eq!(TargetSymbol::from_name(symbol.name()), Ok(symbol));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(
            TargetSymbol::from_name("arduino_avr_mega"),
            Err(PinoutError::UnknownSymbol)
        );
        assert_eq!(
            TargetSymbol::from_name("ARDUINO_SAMD_MKRFox1200"),
            Ok(TargetSymbol::ArduinoSamdMkrFox1200)
        );
    }

    #[test]
    fn test_set_operations() {
        let set = TargetSymbols::from_slice(&[TargetSymbol::Stm32f4, TargetSymbol::CoreTeensy]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(TargetSymbol::Stm32f4));
        assert!(!set.contains(TargetSymbol::Stm32f7));

        // Iteration follows declaration order, not insertion order
        let symbols: Vec<_> = set.iter().collect();
        assert_eq!(symbols, [TargetSymbol::CoreTeensy, TargetSymbol::Stm32f4]);

        assert_eq!(
            set.first_of(&[TargetSymbol::Stm32f0, TargetSymbol::Stm32f4]),
            Some(TargetSymbol::Stm32f4)
        );
        assert_eq!(set.first_of(&[TargetSymbol::Samd51]), None);
    }

    #[test]
    fn test_parse() {
        let set = TargetSymbols::parse(["NRF52_SERIES", " __SAMD51__ "]).unwrap();
        assert!(set.contains(TargetSymbol::Nrf52Series));
        assert!(set.contains(TargetSymbol::Samd51));

        assert_eq!(
            TargetSymbols::parse(["NRF52_SERIES", "ESP32"]),
            Err(PinoutError::UnknownSymbol)
        );
        assert!(TargetSymbols::parse([]).unwrap().is_empty());
    }

    #[test]
    fn test_collect() {
        let set: TargetSymbols = [TargetSymbol::Sam3x8e, TargetSymbol::Sam3x8e]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }
}
