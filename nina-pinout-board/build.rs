//! Build script for nina-pinout-board
//!
//! - Turns the enabled board features into the target symbol set
//! - Loads the wiring override named by `NINA_WIRING`
//! - Warns when the resolved pins are unverified placeholders

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use nina_pinout::{resolve, Resolution, Signal, TargetSymbols, WiringOverride};
use serde::Deserialize;

#[path = "src/features.rs"]
mod features;

/// Layout of the wiring override file
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WiringFile {
    #[serde(default)]
    wiring: WiringOverride,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/features.rs");
    println!("cargo:rerun-if-env-changed=NINA_WIRING");

    let target = enabled_symbols();
    let (wiring, source) = load_wiring();
    check_resolution(&target, &wiring, source.as_deref());
    write_generated(&target, &wiring, source.as_deref());
}

/// Collect the target symbols of all enabled board features
fn enabled_symbols() -> TargetSymbols {
    features::FEATURE_SYMBOLS
        .iter()
        .filter(|(feature, _)| {
            let var = format!(
                "CARGO_FEATURE_{}",
                feature.to_uppercase().replace('-', "_")
            );
            env::var_os(var).is_some()
        })
        .map(|(_, symbol)| *symbol)
        .collect()
}

/// Load the wiring override, if `NINA_WIRING` names a file
///
/// Relative paths are resolved against this crate's directory.
fn load_wiring() -> (WiringOverride, Option<String>) {
    let path = match env::var_os("NINA_WIRING") {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => return (WiringOverride::NONE, None),
    };
    let path = if path.is_relative() {
        Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join(path)
    } else {
        path
    };
    println!("cargo:rerun-if-changed={}", path.display());

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => fail(
            "Failed to read NINA_WIRING file",
            &[format!("Path: {}", path.display()), format!("Error: {}", e)],
        ),
    };

    let file: WiringFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
            fail("Invalid wiring override", &lines)
        }
    };

    (file.wiring, Some(path.display().to_string()))
}

/// Check the override against the resolved family and emit warnings
fn check_resolution(target: &TargetSymbols, wiring: &WiringOverride, source: Option<&str>) {
    match resolve(target) {
        Resolution::Profile {
            family, profile, ..
        } => {
            if wiring.is_empty() {
                if !profile.verified {
                    println!(
                        "cargo:warning=You have to modify pin usage according to actual connection for {}",
                        family.label()
                    );
                }
                return;
            }

            let applied = profile.with_override(wiring);
            if let Err(e) = applied.validate() {
                let mut lines = vec![format!("Family: {}", family.label()), format!("Error: {}", e)];
                lines.extend(
                    Signal::ALL
                        .iter()
                        .map(|s| format!("{:<14} = {}", s.name(), applied.pin(*s))),
                );
                fail("Inconsistent NINA wiring override", &lines);
            }

            println!(
                "cargo:warning=NINA wiring from {} validated for {}",
                source.unwrap_or("NINA_WIRING"),
                family.label()
            );
        }
        Resolution::Deferred { symbol, .. } => {
            if !wiring.is_empty() {
                println!(
                    "cargo:warning={} uses its native NINA wiring, NINA_WIRING is ignored",
                    symbol.name()
                );
            }
        }
        // Reported by compile_error! in the crate unless `no-board` is set
        Resolution::Unmatched => {}
    }
}

/// Write the target symbols and wiring override as Rust constants
fn write_generated(target: &TargetSymbols, wiring: &WiringOverride, source: Option<&str>) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let symbols: Vec<String> = target
        .iter()
        .map(|s| format!("nina_pinout::TargetSymbol::{:?}", s))
        .collect();
    let fields: Vec<String> = Signal::ALL
        .iter()
        .map(|s| format!("    {}: {:?},", s.key(), wiring.get(*s)))
        .collect();

    let code = format!(
        "// Generated by build.rs from the enabled board features and NINA_WIRING.\n\
         \n\
         /// Target symbols defined by the enabled board features\n\
         pub const TARGET: nina_pinout::TargetSymbols =\n    \
         nina_pinout::TargetSymbols::from_slice(&[{}]);\n\
         \n\
         /// Wiring override loaded from `NINA_WIRING`\n\
         pub const WIRING: nina_pinout::WiringOverride = nina_pinout::WiringOverride {{\n\
         {}\n\
         }};\n\
         \n\
         /// Path of the wiring override file, if one was loaded\n\
         pub const WIRING_SOURCE: Option<&str> = {:?};\n",
        symbols.join(", "),
        fields.join("\n"),
        source,
    );

    fs::write(out_dir.join("board.rs"), code).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
