//! LED table extraction from the firmware C source.
//!
//! The firmware declares which LEDs a signal lights and how they blink as
//! plain C tables. Rather than a C parser, three line-oriented patterns
//! pick them out:
//!
//! ```text
//!     [LEDS_CAPS] = {.len = 2, .leds = {5, 8}},
//! #define BLINK_SLOW 100, 300, 20
//! #define CAPS_ON LEDS_CAPS, BLINK_SLOW /* caps lock */
//! ```
//!
//! A non-numeric cycle count in a blink pattern means the pattern repeats
//! until cancelled.

use crate::models::{BlinkPattern, LedSignal, LedTables};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// Extracts the LED signal tables from a firmware source file.
///
/// # Errors
///
/// Returns errors for a missing or unreadable file. Source lines that match
/// none of the table patterns are ignored.
pub fn parse_led_tables(path: &Path) -> Result<LedTables> {
    if !path.exists() {
        anyhow::bail!(
            "Firmware source not found: {}\n\n\
             Please check the file path and try again.",
            path.display()
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read firmware source: {}", path.display()))?;
    Ok(parse_led_tables_str(&content))
}

/// Extracts the LED signal tables from firmware source text.
#[must_use]
pub fn parse_led_tables_str(content: &str) -> LedTables {
    let led_set_re = Regex::new(r" *\[LEDS_([A-Z_]+)\] *= \{\.len.+\{([0-9, ]+)\}\},").unwrap();
    let led_list_re = Regex::new(r"[0-9]+").unwrap();
    let blink_re = Regex::new(r"^#define BLINK_([A-Z_]+) ([0-9]+), ([0-9]+), ([0-9A-Z]+)").unwrap();
    let signal_re =
        Regex::new(r"^#define [A-Z_]+_ON LEDS_([A-Z_]+), BLINK_([A-Z_]+) .*/\* (.*) \*/").unwrap();

    let mut tables = LedTables::default();
    for line in content.lines() {
        if let Some(caps) = led_set_re.captures(line) {
            let leds = led_list_re
                .find_iter(&caps[2])
                .filter_map(|m| m.as_str().parse::<usize>().ok())
                .collect();
            tables.led_sets.insert(caps[1].to_string(), leds);
        }
        if let Some(caps) = blink_re.captures(line) {
            let pattern = BlinkPattern {
                on: caps[2].parse().unwrap_or(0),
                off: caps[3].parse().unwrap_or(0),
                cycles: caps[4].parse().unwrap_or(-1),
            };
            tables.blink_patterns.insert(caps[1].to_string(), pattern);
        }
        if let Some(caps) = signal_re.captures(line) {
            tables.signals.insert(
                caps[3].to_string(),
                LedSignal {
                    led_set: caps[1].to_string(),
                    blink_pattern: caps[2].to_string(),
                },
            );
        }
    }
    tables
}
