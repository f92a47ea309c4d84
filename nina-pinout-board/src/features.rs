//! Board feature to target symbol mapping
//!
//! Shared with the build script, which turns the enabled features into
//! the crate's target symbol set.

use nina_pinout::TargetSymbol;

/// Cargo feature name and the target symbol it defines
pub const FEATURE_SYMBOLS: [(&str, TargetSymbol); 15] = [
    ("samd21", TargetSymbol::Samd21g18a),
    ("samd51", TargetSymbol::Samd51),
    ("nano-33-iot", TargetSymbol::ArduinoSamdNano33Iot),
    ("mkr-wifi-1010", TargetSymbol::ArduinoSamdMkrWifi1010),
    ("mkr-vidor-4000", TargetSymbol::ArduinoSamdMkrVidor4000),
    ("nrf52", TargetSymbol::Nrf52Series),
    ("avr-mega", TargetSymbol::ArduinoAvrMega2560),
    ("teensy", TargetSymbol::CoreTeensy),
    ("sam3x8e", TargetSymbol::Sam3x8e),
    ("stm32f0", TargetSymbol::Stm32f0),
    ("stm32f1", TargetSymbol::Stm32f1),
    ("stm32f2", TargetSymbol::Stm32f2),
    ("stm32f3", TargetSymbol::Stm32f3),
    ("stm32f4", TargetSymbol::Stm32f4),
    ("stm32f7", TargetSymbol::Stm32f7),
];
