//! Profile resolver
//!
//! Families are tried in [`BoardFamily::PRECEDENCE`] order and the first
//! one with a defined symbol wins. The SAMD family has a carve-out: when a
//! board with its own NINA wiring is also defined, it resolves to
//! [`Resolution::Deferred`] and no profile is produced.

use crate::error::PinoutError;
use crate::family::{BoardFamily, NATIVE_NINA};
use crate::profile::BoardPinProfile;
use crate::symbol::{TargetSymbol, TargetSymbols};
use crate::table::profile_for;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of resolving a target's symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolution {
    /// A family matched
    Profile {
        /// Matched family
        family: BoardFamily,
        /// First family symbol that was defined
        symbol: TargetSymbol,
        /// The family's pin profile
        profile: BoardPinProfile,
    },
    /// SAMD matched but the board has native NINA wiring
    Deferred {
        /// Matched family
        family: BoardFamily,
        /// Carve-out symbol that caused the deferral
        symbol: TargetSymbol,
    },
    /// No family matched
    Unmatched,
}

impl Resolution {
    /// Resolved profile, if any
    pub const fn profile(&self) -> Option<&BoardPinProfile> {
        match self {
            Self::Profile { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// Matched family, including deferred ones
    pub const fn family(&self) -> Option<BoardFamily> {
        match self {
            Self::Profile { family, .. } | Self::Deferred { family, .. } => Some(*family),
            Self::Unmatched => None,
        }
    }

    /// Resolved profile, or why there is none
    pub const fn require(&self) -> Result<&BoardPinProfile, PinoutError> {
        match self {
            Self::Profile { profile, .. } => Ok(profile),
            Self::Deferred { .. } => Err(PinoutError::DeferredToNative),
            Self::Unmatched => Err(PinoutError::UnsupportedBoard),
        }
    }
}

/// Resolve the active profile for a set of target symbols
pub const fn resolve(symbols: &TargetSymbols) -> Resolution {
    let mut i = 0;
    while i < BoardFamily::PRECEDENCE.len() {
        let family = BoardFamily::PRECEDENCE[i];
        if let Some(symbol) = symbols.first_of(family.symbols()) {
            if let BoardFamily::Samd = family {
                if let Some(native) = symbols.first_of(&NATIVE_NINA) {
                    return Resolution::Deferred {
                        family,
                        symbol: native,
                    };
                }
            }
            return Resolution::Profile {
                family,
                symbol,
                profile: profile_for(family),
            };
        }
        i += 1;
    }
    Resolution::Unmatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolve_names(names: &[&str]) -> Resolution {
        resolve(&TargetSymbols::parse(names.iter().copied()).unwrap())
    }

    #[test]
    fn test_each_family_resolves() {
        for family in BoardFamily::PRECEDENCE {
            for &symbol in family.symbols() {
                let resolution = resolve(&TargetSymbols::empty().with(symbol));
                assert_eq!(
                    resolution,
                    Resolution::Profile {
                        family,
                        symbol,
                        profile: profile_for(family),
                    }
                );
            }
        }
    }

    #[test]
    fn test_avr_mega() {
        let r = resolve_names(&["ARDUINO_AVR_MEGA2560"]);
        let p = r.require().unwrap();
        assert_eq!(p.nina_gpio0, 26);
        assert_eq!(p.nina_resetn, 27);
        assert_eq!(p.nina_ack, 28);
        assert_eq!(p.spiwifi_ss, 24);
        assert_eq!(p.spiwifi_ack, 28);
        assert_eq!(p.spiwifi_reset, 27);
    }

    #[test]
    fn test_nrf52() {
        let r = resolve_names(&["NRF52840_FEATHER"]);
        let p = r.require().unwrap();
        assert_eq!(p.nina_gpio0, 26);
        assert_eq!(p.nina_resetn, 25);
        assert_eq!(p.nina_ack, 24);
        assert_eq!(p.spiwifi_ss, 16);
        assert_eq!(p.spiwifi_ack, 24);
        assert_eq!(p.spiwifi_reset, 25);
    }

    #[test]
    fn test_precedence() {
        // nRF52 beats Mega, which beats Teensy
        let r = resolve_names(&["CORE_TEENSY", "ARDUINO_AVR_MEGA", "NRF52_SERIES"]);
        assert_eq!(r.family(), Some(BoardFamily::Nrf52));

        let r = resolve_names(&["STM32F4", "CORE_TEENSY"]);
        assert_eq!(r.family(), Some(BoardFamily::Teensy));

        let r = resolve_names(&["STM32F4", "__SAM3X8E__"]);
        assert_eq!(r.family(), Some(BoardFamily::Sam3x8e));

        let r = resolve_names(&["__SAMD51__", "NRF52_SERIES"]);
        assert_eq!(r.family(), Some(BoardFamily::Samd));
    }

    #[test]
    fn test_symbol_reports_first_in_family_order() {
        let r = resolve_names(&["STM32F7", "STM32F1"]);
        match r {
            Resolution::Profile { symbol, .. } => assert_eq!(symbol, TargetSymbol::Stm32f1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unmatched() {
        let r = resolve(&TargetSymbols::empty());
        assert_eq!(r, Resolution::Unmatched);
        assert_eq!(r.profile(), None);
        assert_eq!(r.family(), None);
        assert_eq!(r.require(), Err(PinoutError::UnsupportedBoard));
    }

    #[test]
    fn test_native_board_alone_is_unmatched() {
        let r = resolve_names(&["ARDUINO_SAMD_NANO_33_IOT"]);
        assert_eq!(r, Resolution::Unmatched);
    }

    #[test]
    fn test_samd_defers_to_native_board() {
        let r = resolve_names(&["__SAMD21G18A__", "ARDUINO_SAMD_NANO_33_IOT"]);
        assert_eq!(
            r,
            Resolution::Deferred {
                family: BoardFamily::Samd,
                symbol: TargetSymbol::ArduinoSamdNano33Iot,
            }
        );
        assert_eq!(r.profile(), None);
        assert_eq!(r.require(), Err(PinoutError::DeferredToNative));
    }

    #[test]
    fn test_samd_defers_for_due_symbols() {
        // The Due symbols are in the carve-out, so SAMD + Due defines nothing
        let r = resolve_names(&["ARDUINO_SAMD_ZERO", "ARDUINO_SAM_DUE"]);
        assert!(matches!(r, Resolution::Deferred { .. }));

        // Without a SAMD symbol the Due branch is reached
        let r = resolve_names(&["ARDUINO_SAM_DUE"]);
        assert_eq!(r.family(), Some(BoardFamily::Sam3x8e));
    }

    #[test]
    fn test_carve_out_only_applies_to_samd() {
        let r = resolve_names(&["CORE_TEENSY", "ARDUINO_SAMD_MKRWIFI1010"]);
        assert_eq!(r.family(), Some(BoardFamily::Teensy));
        assert!(r.profile().is_some());
    }

    #[test]
    fn test_resolves_in_const_context() {
        const TARGET: TargetSymbols = TargetSymbols::empty().with(TargetSymbol::Stm32f0);
        const ACTIVE: Resolution = resolve(&TARGET);
        assert_eq!(ACTIVE.family(), Some(BoardFamily::Stm32));
    }

    fn symbol_set() -> impl Strategy<Value = TargetSymbols> {
        proptest::collection::vec(proptest::sample::select(TargetSymbol::ALL.to_vec()), 0..8)
            .prop_map(|symbols| symbols.into_iter().collect::<TargetSymbols>())
    }

    proptest! {
        #[test]
        fn prop_highest_family_wins(set in symbol_set()) {
            let expected = BoardFamily::PRECEDENCE
                .iter()
                .copied()
                .find(|f| set.first_of(f.symbols()).is_some());
            prop_assert_eq!(resolve(&set).family(), expected);
        }

        #[test]
        fn prop_no_family_symbol_is_unmatched(set in symbol_set()) {
            let only_native = set.iter().all(|s| BoardFamily::of(s).is_none());
            if only_native {
                prop_assert_eq!(resolve(&set), Resolution::Unmatched);
            }
        }

        #[test]
        fn prop_profile_only_without_deferral(set in symbol_set()) {
            let r = resolve(&set);
            let samd = set.first_of(BoardFamily::Samd.symbols()).is_some();
            let native = set.first_of(&NATIVE_NINA).is_some();
            prop_assert_eq!(
                matches!(r, Resolution::Deferred { .. }),
                samd && native
            );
        }
    }
}
