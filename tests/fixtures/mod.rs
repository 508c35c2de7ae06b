//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a finger record line of the fixed-column chordmap format.
///
/// Columns: `*` marker, the four chord-column digits at 2-5, lower modifier
/// flags at 7-10, a single-glyph lower legend at 16 or a word legend at
/// 18-26, upper modifier flags at 28-31, and the upper legend at 37 (glyph)
/// or 39+ (word).
pub fn finger_line(
    cols: &str,
    lo_flags: &str,
    lo_char: Option<char>,
    lo_word: &str,
    up_flags: &str,
    up_char: Option<char>,
    up_word: &str,
) -> String {
    let mut line = vec![' '; 39 + up_word.chars().count().max(1)];
    line[0] = '*';
    for (i, c) in cols.chars().enumerate() {
        line[2 + i] = c;
    }
    for (i, c) in lo_flags.chars().enumerate() {
        line[7 + i] = c;
    }
    if let Some(c) = lo_char {
        line[16] = c;
    }
    for (i, c) in lo_word.chars().enumerate() {
        line[18 + i] = c;
    }
    for (i, c) in up_flags.chars().enumerate() {
        line[28 + i] = c;
    }
    if let Some(c) = up_char {
        line[37] = c;
    }
    for (i, c) in up_word.chars().enumerate() {
        line[39 + i] = c;
    }
    line.into_iter().collect()
}

/// Builds a thumb record line: digits at 3-5, legend at 24+.
pub fn thumb_line(cols: &str, word: &str) -> String {
    let mut line = vec![' '; 24 + word.chars().count().max(1)];
    line[0] = '*';
    for (i, c) in cols.chars().enumerate() {
        line[3 + i] = c;
    }
    for (i, c) in word.chars().enumerate() {
        line[24 + i] = c;
    }
    line.into_iter().collect()
}

/// Builds an fn record line: fn key digit at 2, chord digits at 4-7,
/// modifier flags at 9-12 and 14-17, duration flag at 19, legend at 26+.
pub fn fn_line(fn_key: char, cols: &str, left: &str, right: &str, dur: char, word: &str) -> String {
    let mut line = vec![' '; 26 + word.chars().count().max(1)];
    line[0] = '*';
    line[2] = fn_key;
    for (i, c) in cols.chars().enumerate() {
        line[4 + i] = c;
    }
    for (i, c) in left.chars().enumerate() {
        line[9 + i] = c;
    }
    for (i, c) in right.chars().enumerate() {
        line[14 + i] = c;
    }
    line[19] = dur;
    for (i, c) in word.chars().enumerate() {
        line[26 + i] = c;
    }
    line.into_iter().collect()
}

/// A small but representative chordmap dump: letter pairs, special keys,
/// a shift placeholder, a thumb chord, a modifier chord and an unused slot.
pub fn sample_chordmap() -> String {
    [
        "chord table".to_string(),
        finger_line("2000", "    ", Some('a'), "", "    ", Some('A'), ""),
        finger_line("0200", "    ", Some('b'), "", "    ", Some('B'), ""),
        finger_line("1300", "    ", None, "enter", "    ", None, "escape"),
        finger_line("0030", "s   ", None, "no", "s   ", None, "no"),
        finger_line("3100", "    ", None, "space", "    ", None, "bspace"),
        finger_line("0013", "    ", None, "no", "    ", None, "no"),
        thumb_line("400", "numlock"),
        fn_line('0', "2000", "as  ", "    ", '1', "modifiers"),
        fn_line('1', "0100", "    ", "    ", ' ', "volup"),
    ]
    .join("\n")
}

/// Firmware C source carrying two LED sets, two blink patterns and two
/// signal bindings.
pub fn sample_firmware() -> String {
    "\
#include \"led.h\"
static const led_set_t led_sets[] = {
    [LEDS_CAPS] = {.len = 2, .leds = {5, 8}},
    [LEDS_NUM_ROW] = {.len = 3, .leds = {0, 1, 6}},
};
#define BLINK_SLOW 100, 300, 20
#define BLINK_SOLID 400, 0, FOREVER
#define CAPS_ON LEDS_CAPS, BLINK_SLOW /* caps lock */
#define NUM_ON LEDS_NUM_ROW, BLINK_SOLID /* number pad layer */
"
    .to_string()
}

/// Writes `content` into a fresh temp dir and returns the file path with
/// the dir guard keeping it alive.
pub fn write_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    (path, dir)
}
