//! Display ordering for chord pads.
//!
//! Pads are sorted with three stable passes, the last one primary: the sheet
//! shows single-glyph legends first, grouped by legend character category
//! (digits, letters, punctuation, symbols), alphabetically within each
//! group. Display-name substitution must already have happened; the sort
//! keys read the final legend text.

use crate::models::ChordPad;

/// Sorts pads into their on-sheet order.
pub fn sort_for_display(pads: &mut [ChordPad]) {
    pads.sort_by(|a, b| a.legend.to_lowercase().cmp(&b.legend.to_lowercase()));
    pads.sort_by_key(|p| category_rank(p.legend.chars().next()));
    pads.sort_by_key(|p| !p.legend_is_glyph);
}

/// Rank of a legend's first character: digits before letters before
/// punctuation before symbols before everything else.
fn category_rank(first: Option<char>) -> u8 {
    let Some(c) = first else { return 4 };
    if c.is_numeric() {
        0
    } else if c.is_alphabetic() {
        1
    } else if is_symbol(c) {
        3
    } else if c.is_ascii_punctuation() {
        2
    } else if c.is_whitespace() || c.is_control() {
        4
    } else {
        // Remaining printable non-alphanumerics (glyph legends such as the
        // arrow and backspace symbols) count as symbols.
        3
    }
}

/// ASCII characters in the Unicode symbol categories.
fn is_symbol(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}
