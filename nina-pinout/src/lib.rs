//! Board-agnostic pin table for the NINA WiFi co-processor
//!
//! This crate maps the identifying symbols of a build target to the pin
//! numbers the NINA module is wired to:
//!
//! - Target symbols and symbol sets
//! - Board families and their precedence
//! - The literal pin table per family
//! - The resolver that picks the active profile
//! - Wiring overrides and profile validation
//! - Reference wiring for boards with an on-board NINA module
//!
//! Everything here is `const`-evaluable so that board crates can resolve
//! the active profile at compile time.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod family;
pub mod profile;
pub mod reference;
pub mod resolver;
pub mod symbol;
pub mod table;
pub mod wiring;

pub use error::PinoutError;
pub use family::BoardFamily;
pub use profile::{BoardPinProfile, Signal};
pub use reference::{NativeWiring, NANO_33_IOT};
pub use resolver::{resolve, Resolution};
pub use symbol::{TargetSymbol, TargetSymbols};
pub use table::profile_for;
pub use wiring::WiringOverride;
