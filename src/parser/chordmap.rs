//! Fixed-column chordmap text parsing.
//!
//! The firmware's `prnt chds` chord types the whole chord table as plain
//! text. Every record line starts with `*`; the line shape decides the
//! section:
//!
//! ```text
//! * 2000 ----  a  (word....) ----          A    finger: lower + upper pad
//! *  400                  (word...)             thumb
//! * 0 2000 a--- ---- 1    (word...)             fn layer
//! ```
//!
//! Finger lines define two pads, the plain chord and the thumb-shifted
//! (upper-case) variant. Columns hold, per chord column, the digit of the
//! pressed finger row (0 = released). Modifier flag groups use `a`/`s`/`g`/
//! `c` for Alt/Shift/GUI/Ctrl; the fn duration column marks sticky (`1`)
//! and toggle (`t`) modifiers.

use crate::models::{Chord, ChordPad, Section};
use anyhow::{Context, Result};
use std::path::Path;

/// Parses a chordmap text dump from a file.
///
/// # Errors
///
/// Returns errors for a missing file or unreadable content. Lines that do
/// not match any record shape are ignored, matching the firmware dump which
/// interleaves records with captions.
pub fn parse_chordmap(path: &Path) -> Result<Vec<ChordPad>> {
    if !path.exists() {
        anyhow::bail!(
            "Chordmap file not found: {}\n\n\
             Please check the file path and try again.",
            path.display()
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chordmap file: {}", path.display()))?;
    Ok(parse_chordmap_str(&content))
}

/// Parses a chordmap text dump from a string.
#[must_use]
pub fn parse_chordmap_str(content: &str) -> Vec<ChordPad> {
    let mut pads = Vec::new();
    for line in content.lines() {
        let r: Vec<char> = line.chars().collect();
        if r.is_empty() || r[0] != '*' {
            continue;
        }
        if r.len() > 37 {
            parse_finger_line(&r, &mut pads);
        } else if r.len() > 23 && r[2] == ' ' {
            parse_thumb_line(&r, &mut pads);
        } else if r.len() > 25 {
            parse_fn_line(&r, &mut pads);
        }
    }
    for pad in &mut pads {
        if let Some(glyph) = glyph_for(&pad.legend) {
            pad.legend = glyph.to_string();
            pad.legend_is_glyph = true;
        }
    }
    pads
}

/// A finger line holds the lower-case chord and its thumb-shifted upper
/// variant side by side.
fn parse_finger_line(r: &[char], pads: &mut Vec<ChordPad>) {
    let chord = chord_from_digits(&r[2..6]);
    let mut lower = ChordPad::new(Section::Finger, "");
    lower.chord = chord;
    if r[16] != ' ' {
        lower.legend = r[16].to_string();
        lower.legend_is_glyph = true;
    } else {
        lower.legend = text_at(r, 18, Some(27));
        if lower.legend == "no" && flags_at(r, 7).contains('s') {
            // The unassigned slot shadowed by the shift modifier.
            lower.legend = "Left Shift".to_string();
        }
    }
    pads.push(lower);

    let mut upper = ChordPad::new(Section::Finger, "");
    upper.chord = chord;
    upper.chord.press(4, 1);
    if r[37] != ' ' {
        upper.legend = r[37].to_string();
        upper.legend_is_glyph = true;
    } else {
        upper.legend = text_at(r, 39, None);
        if upper.legend == "no" && flags_at(r, 28).contains('s') {
            upper.legend = "Left Shift".to_string();
        }
    }
    pads.push(upper);
}

fn parse_thumb_line(r: &[char], pads: &mut Vec<ChordPad>) {
    let mut pad = ChordPad::new(Section::Thumb, "");
    pad.chord = chord_from_digits(&r[3..6]);
    pad.legend = text_at(r, 24, None);
    if pad.legend.is_empty() {
        pad.legend = "DUMMY".to_string();
    }
    pads.push(pad);
}

fn parse_fn_line(r: &[char], pads: &mut Vec<ChordPad>) {
    let mut pad = ChordPad::new(Section::Fn, "");
    pad.chord = chord_from_digits(&r[4..8]);
    match r[2] {
        '0' => pad.chord.press(4, 0),
        '1' => pad.chord.press(4, 2),
        _ => {}
    }
    pad.legend = text_at(r, 26, None);
    let left = flags_at(r, 9);
    let right = flags_at(r, 14);
    for (flag, name) in [('a', "L Alt"), ('s', "L Shift"), ('g', "L GUI"), ('c', "L Ctrl")] {
        if left.contains(flag) {
            pad.modifiers.push(name.to_string());
        }
    }
    for (flag, name) in [('a', "R Alt"), ('s', "R Shift"), ('g', "R GUI"), ('c', "R Ctrl")] {
        if right.contains(flag) {
            pad.modifiers.push(name.to_string());
        }
    }
    pad.modifier_duration = match r[19] {
        '1' => Some("(sticky)".to_string()),
        't' => Some("(toggle)".to_string()),
        _ => None,
    };
    pads.push(pad);
}

/// Builds a chord from one digit per column: the digit is the pressed row,
/// 0 or anything outside the matrix leaves the column released.
fn chord_from_digits(digits: &[char]) -> Chord {
    let mut chord = Chord::new();
    for (col, digit) in digits.iter().enumerate() {
        let row = digit.to_digit(10).unwrap_or(0) as usize;
        if (1..crate::models::CHORD_ROWS).contains(&row) {
            chord.press(row, col);
        }
    }
    chord
}

/// Text field starting at `start`, optionally bounded, right-trimmed.
fn text_at(r: &[char], start: usize, end: Option<usize>) -> String {
    let end = end.unwrap_or(r.len()).min(r.len());
    if start >= end {
        return String::new();
    }
    r[start..end]
        .iter()
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// A 4-character modifier flag group.
fn flags_at(r: &[char], start: usize) -> String {
    text_at(r, start, Some(start + 4))
}

/// Single-glyph replacements for legends with a conventional keyboard symbol.
fn glyph_for(legend: &str) -> Option<char> {
    match legend {
        "bspace" => Some('\u{232b}'),
        "down" => Some('\u{25bd}'),
        "left" => Some('\u{25c1}'),
        "right" => Some('\u{25b7}'),
        "space" => Some('\u{2423}'),
        "up" => Some('\u{25b3}'),
        _ => None,
    }
}

/// Display name for legends naming a special (non-glyph) key, used both to
/// select the records shown in the "Simple Chords" section and to rewrite
/// their legends before sorting.
#[must_use]
pub fn special_key_name(legend: &str) -> Option<&'static str> {
    let name = match legend {
        "Left Shift" => "Left Shift", // synthetic, produced by the parser
        "again" => "Again",
        "appl" => "Appl",
        "capslock" => "Caps Lock",
        "copy" | "copz" => "Copy",
        "cut" => "Cut",
        "delete" => "Delete",
        "end" => "End",
        "enter" => "Enter",
        "escape" => "Escape",
        "f1" => "F1",
        "f2" => "F2",
        "f3" => "F3",
        "f4" => "F4",
        "f5" => "F5",
        "f6" => "F6",
        "f7" => "F7",
        "f8" => "F8",
        "f9" => "F9",
        "f10" => "F10",
        "f11" => "F11",
        "f12" => "F12",
        "f13" => "F13",
        "f14" => "F14",
        "f15" => "F15",
        "f16" => "F16",
        "f17" => "F17",
        "f18" => "F18",
        "f19" => "F19",
        "f20" => "F20",
        "f21" => "F21",
        "f22" => "F22",
        "f23" => "F23",
        "f24" => "F24",
        "find" => "Find",
        "help" => "Help",
        "home" => "Home",
        "insert" => "Insert",
        "int1" => "Intl 1",
        "int2" => "Intl 2",
        "int3" => "Intl 3",
        "int4" => "Intl 4",
        "int5" => "Intl 5",
        "int6" => "Intl 6",
        "int7" => "Intl 7",
        "int8" => "Intl 8",
        "int9" => "Intl 9",
        "kp 0" => "Keypad 0",
        "kp 1" => "Keypad 1",
        "kp 2" => "Keypad 2",
        "kp 3" => "Keypad 3",
        "kp 4" => "Keypad 4",
        "kp 5" => "Keypad 5",
        "kp 6" => "Keypad 6",
        "kp 7" => "Keypad 7",
        "kp 8" => "Keypad 8",
        "kp 9" => "Keypad 9",
        "kp aster" => "Keypad *",
        "kp comma" => "Keypad Comma",
        "kp dot" => "Keypad Dot",
        "kp enter" => "Keypad Enter",
        "kp equal" => "Keypad =",
        "kp minus" => "Keypad -",
        "kp plus" => "Keypad +",
        "kp slash" => "Keypad /",
        "lang1" => "Lang 1",
        "lang2" => "Lang 2",
        "lang3" => "Lang 3",
        "lang4" => "Lang 4",
        "lang5" => "Lang 5",
        "lang6" => "Lang 6",
        "lang7" => "Lang 7",
        "lang8" => "Lang 8",
        "lang9" => "Lang 9",
        "macro 0" => "store/play macro 0",
        "macro 1" => "store/play macro 1",
        "macro 2" => "store/play macro 2",
        "macro 3" => "store/play macro 3",
        "macro 4" => "store/play macro 4",
        "macro 5" => "store/play macro 5",
        "macro 6" => "store/play macro 6",
        "macro 7" => "store/play macro 7",
        "macro lr" => "macro layer",
        "mouse lr" => "mouse layer",
        "mute" => "Mute",
        "nav lr" => "navigation layer",
        "numlock" => "Num Lock",
        "numpad lr" => "number pad layer",
        "paste" => "Paste",
        "pause" => "Pause",
        "pgdown" => "Page Down",
        "pgup" => "Page Up",
        "power" => "Power",
        "prnt chds" => "type chordmap",
        "pscreen" => "Print Screen",
        "rec macro" => "start macro record",
        "reset kbd" => "keyboard reset",
        "scrolllck" => "Scroll Lock",
        "stop" => "Stop",
        "swap chds" => "start chord swap",
        "sysreq" | "szsreq" => "SysReq",
        "tab" => "Tab",
        "voldown" => "Volume Down",
        "volup" => "Volume Up",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a finger record line with fields at their fixed columns.
    fn finger_line(
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

    fn thumb_line(cols: &str, word: &str) -> String {
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

    fn fn_line(fn_key: char, cols: &str, left: &str, right: &str, dur: char, word: &str) -> String {
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

    #[test]
    fn test_finger_line_yields_lower_and_upper_pads() {
        let pads = parse_chordmap_str(&finger_line(
            "2000",
            "    ",
            Some('a'),
            "",
            "    ",
            Some('A'),
            "",
        ));
        assert_eq!(pads.len(), 2);
        assert_eq!(pads[0].legend, "a");
        assert!(pads[0].legend_is_glyph);
        assert_eq!(pads[0].section, Section::Finger);
        assert_eq!(pads[0].chord.flat().0, [2, 0, 0, 0]);
        assert_eq!(pads[0].chord.flat().1, [0, 0, 0]);

        assert_eq!(pads[1].legend, "A");
        assert_eq!(pads[1].chord.flat().0, [2, 0, 0, 0]);
        // The upper pad carries the shift thumb key.
        assert_eq!(pads[1].chord.flat().1, [0, 4, 0]);
    }

    #[test]
    fn test_finger_line_word_legends() {
        let pads = parse_chordmap_str(&finger_line(
            "1300",
            "    ",
            None,
            "enter",
            "    ",
            None,
            "escape",
        ));
        assert_eq!(pads[0].legend, "enter");
        assert!(!pads[0].legend_is_glyph);
        assert_eq!(pads[1].legend, "escape");
        assert_eq!(pads[0].chord.flat().0, [1, 3, 0, 0]);
    }

    #[test]
    fn test_unassigned_shifted_slot_becomes_left_shift() {
        let pads = parse_chordmap_str(&finger_line(
            "0030", "s   ", None, "no", "s   ", None, "no",
        ));
        assert_eq!(pads[0].legend, "Left Shift");
        assert_eq!(pads[1].legend, "Left Shift");
    }

    #[test]
    fn test_thumb_line() {
        let pads = parse_chordmap_str(&thumb_line("400", "numlock"));
        assert_eq!(pads.len(), 1);
        assert_eq!(pads[0].section, Section::Thumb);
        assert_eq!(pads[0].legend, "numlock");
        assert_eq!(pads[0].chord.flat().1, [4, 0, 0]);
    }

    #[test]
    fn test_thumb_line_empty_legend_is_placeholder() {
        let pads = parse_chordmap_str(&thumb_line("040", ""));
        assert_eq!(pads[0].legend, "DUMMY");
    }

    #[test]
    fn test_fn_line_modifiers_and_duration() {
        let pads = parse_chordmap_str(&fn_line('0', "2000", "as c", "g   ", '1', "modifiers"));
        assert_eq!(pads.len(), 1);
        assert_eq!(pads[0].section, Section::Fn);
        assert_eq!(pads[0].legend, "modifiers");
        assert_eq!(
            pads[0].modifiers,
            vec!["L Alt", "L Shift", "L Ctrl", "R GUI"]
        );
        assert_eq!(pads[0].modifier_duration.as_deref(), Some("(sticky)"));
        // fn key 0 presses thumb column 0.
        assert_eq!(pads[0].chord.flat().1, [4, 0, 0]);
    }

    #[test]
    fn test_fn_line_toggle_and_second_fn_key() {
        let pads = parse_chordmap_str(&fn_line('1', "0100", "    ", "s   ", 't', "volup"));
        assert_eq!(pads[0].modifier_duration.as_deref(), Some("(toggle)"));
        assert_eq!(pads[0].chord.flat().1, [0, 0, 4]);
        assert_eq!(pads[0].chord.flat().0, [0, 1, 0, 0]);
    }

    #[test]
    fn test_glyph_translation() {
        let pads = parse_chordmap_str(&finger_line(
            "3000",
            "    ",
            None,
            "space",
            "    ",
            None,
            "bspace",
        ));
        assert_eq!(pads[0].legend, "\u{2423}");
        assert!(pads[0].legend_is_glyph);
        assert_eq!(pads[1].legend, "\u{232b}");
        assert!(pads[1].legend_is_glyph);
    }

    #[test]
    fn test_non_record_lines_are_ignored() {
        let content = "chord map v2\n\n-- section --\n";
        assert!(parse_chordmap_str(content).is_empty());
    }

    #[test]
    fn test_special_key_names() {
        assert_eq!(special_key_name("capslock"), Some("Caps Lock"));
        assert_eq!(special_key_name("kp aster"), Some("Keypad *"));
        assert_eq!(special_key_name("copz"), Some("Copy"));
        assert_eq!(special_key_name("q"), None);
    }
}
