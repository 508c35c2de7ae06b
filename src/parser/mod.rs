//! Parsing for the tool's two input formats.
//!
//! This module handles reading chord records from the firmware's
//! fixed-column chordmap dump and extracting LED signal tables from the
//! firmware C source.

pub mod chordmap;
pub mod firmware_c;

// Re-export commonly used functions
pub use chordmap::{parse_chordmap, parse_chordmap_str, special_key_name};
pub use firmware_c::{parse_led_tables, parse_led_tables_str};
