//! Wiring overrides
//!
//! Family profiles are placeholders. A [`WiringOverride`] carries the pins
//! an integrator actually wired; board crates load it from the file named
//! by `NINA_WIRING` at build time.

use crate::profile::Signal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-signal pin overrides; `None` keeps the family default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WiringOverride {
    pub nina_gpio0: Option<u8>,
    pub nina_resetn: Option<u8>,
    pub nina_ack: Option<u8>,
    pub spiwifi_ss: Option<u8>,
    pub spiwifi_ack: Option<u8>,
    pub spiwifi_reset: Option<u8>,
}

impl WiringOverride {
    /// Override that changes nothing
    pub const NONE: Self = Self {
        nina_gpio0: None,
        nina_resetn: None,
        nina_ack: None,
        spiwifi_ss: None,
        spiwifi_ack: None,
        spiwifi_reset: None,
    };

    /// Check if no signal is overridden
    pub const fn is_empty(&self) -> bool {
        self.nina_gpio0.is_none()
            && self.nina_resetn.is_none()
            && self.nina_ack.is_none()
            && self.spiwifi_ss.is_none()
            && self.spiwifi_ack.is_none()
            && self.spiwifi_reset.is_none()
    }

    /// Override for one signal
    pub const fn get(&self, signal: Signal) -> Option<u8> {
        match signal {
            Signal::NinaGpio0 => self.nina_gpio0,
            Signal::NinaResetn => self.nina_resetn,
            Signal::NinaAck => self.nina_ack,
            Signal::SpiwifiSs => self.spiwifi_ss,
            Signal::SpiwifiAck => self.spiwifi_ack,
            Signal::SpiwifiReset => self.spiwifi_reset,
        }
    }

    /// Set the override for one signal
    pub fn set(&mut self, signal: Signal, pin: u8) {
        let slot = match signal {
            Signal::NinaGpio0 => &mut self.nina_gpio0,
            Signal::NinaResetn => &mut self.nina_resetn,
            Signal::NinaAck => &mut self.nina_ack,
            Signal::SpiwifiSs => &mut self.spiwifi_ss,
            Signal::SpiwifiAck => &mut self.spiwifi_ack,
            Signal::SpiwifiReset => &mut self.spiwifi_reset,
        };
        *slot = Some(pin);
    }

    /// Overridden signals with their pins
    pub fn iter(&self) -> impl Iterator<Item = (Signal, u8)> + '_ {
        Signal::ALL
            .into_iter()
            .filter_map(move |s| self.get(s).map(|pin| (s, pin)))
    }
}


#[cfg(all(test, feature = "serde"))]
mod file_tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct WiringFile {
        #[serde(default)]
        wiring: WiringOverride,
    }

    fn parse(input: &str) -> Result<WiringOverride, toml::de::Error> {
        toml::from_str::<WiringFile>(input).map(|file| file.wiring)
    }

    #[test]
    fn test_partial_table() {
        let wiring = parse("[wiring]\nnina_ack = 7\nspiwifi_ss = 10\n").unwrap();
        assert_eq!(wiring.nina_ack, Some(7));
        assert_eq!(wiring.spiwifi_ss, Some(10));
        assert_eq!(wiring.nina_gpio0, None);
        assert_eq!(wiring.spiwifi_ack, None);
        assert_eq!(wiring.iter().count(), 2);
    }

    #[test]
    fn test_missing_table_is_empty() {
        assert_eq!(parse("").unwrap(), WiringOverride::NONE);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse("[wiring]\nnina_gpio = 7\n").unwrap_err();
        assert!(err.to_string().contains("unknown field"), "{}", err);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(parse("[wiring]\nnina_gpio0 = 300\n").is_err());
        assert!(parse("[wiring]\nnina_gpio0 = -1\n").is_err());
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(parse("[wiring]\nnina_ack = \"D7\"\n").is_err());
    }
}
