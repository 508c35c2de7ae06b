//! Chord press-matrix and keyboard section definitions.

use serde::{Deserialize, Serialize};

/// Number of logical key columns on the board.
pub const CHORD_COLS: usize = 4;

/// Number of matrix rows. Row 0 is reserved, rows 1-3 are finger rows,
/// row 4 holds the thumb keys.
pub const CHORD_ROWS: usize = 5;

/// A simultaneous key-press combination as a boolean press-matrix.
///
/// Rows 1-3 carry at most one pressed finger key per column, so the flat
/// per-column representation returned by [`Chord::flat`] is well defined.
/// The physical thumb key in row 4 spans logical columns 1-2; only column 1
/// is set for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    keys: [[bool; CHORD_COLS]; CHORD_ROWS],
}

impl Chord {
    /// Creates an empty chord with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the key at (`row`, `col`) as pressed.
    pub fn press(&mut self, row: usize, col: usize) {
        self.keys[row][col] = true;
    }

    /// Returns whether the key at (`row`, `col`) is pressed.
    #[must_use]
    pub fn is_pressed(&self, row: usize, col: usize) -> bool {
        self.keys[row][col]
    }

    /// Builds a chord from (row, col) press coordinates.
    #[must_use]
    pub fn from_presses(presses: &[(usize, usize)]) -> Self {
        let mut chord = Self::new();
        for &(row, col) in presses {
            chord.press(row, col);
        }
        chord
    }

    /// Flattens the matrix into per-column profiles.
    ///
    /// The finger profile holds, for each of the 4 columns, the 1-based row
    /// number of the pressed finger key, or 0 if the column is unused. The
    /// thumb profile covers the 3 thumb positions with value 4 when pressed.
    #[must_use]
    pub fn flat(&self) -> ([u8; 4], [u8; 3]) {
        let mut fingers = [0u8; 4];
        let mut thumbs = [0u8; 3];
        for row in 0..3 {
            for col in 0..CHORD_COLS {
                if self.keys[row + 1][col] {
                    fingers[col] = (row + 1) as u8;
                }
            }
        }
        for (col, thumb) in thumbs.iter_mut().enumerate() {
            if self.keys[4][col] {
                *thumb = 4;
            }
        }
        (fingers, thumbs)
    }

    /// Returns whether no key is pressed at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let (fingers, thumbs) = self.flat();
        fingers == [0; 4] && thumbs == [0; 3]
    }
}

/// The input-device zone a chord belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Thumb-key chords (bottom row).
    Thumb,
    /// Plain finger chords.
    Finger,
    /// Function-layer chords (fn thumb key held).
    Fn,
}

impl Section {
    /// The fixed presentation color of this section.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Finger => crate::constants::COLOR_RED,
            Self::Fn => crate::constants::COLOR_GREEN,
            Self::Thumb => crate::constants::COLOR_GREY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_empty_chord() {
        let chord = Chord::new();
        let (fingers, thumbs) = chord.flat();
        assert_eq!(fingers, [0, 0, 0, 0]);
        assert_eq!(thumbs, [0, 0, 0]);
        assert!(chord.is_empty());
    }

    #[test]
    fn test_flat_finger_profile() {
        let chord = Chord::from_presses(&[(1, 0), (3, 2)]);
        let (fingers, thumbs) = chord.flat();
        assert_eq!(fingers, [1, 0, 3, 0]);
        assert_eq!(thumbs, [0, 0, 0]);
        assert!(!chord.is_empty());
    }

    #[test]
    fn test_flat_thumb_profile() {
        let chord = Chord::from_presses(&[(4, 1)]);
        let (fingers, thumbs) = chord.flat();
        assert_eq!(fingers, [0, 0, 0, 0]);
        assert_eq!(thumbs, [0, 4, 0]);
    }

    #[test]
    fn test_section_colors() {
        assert_eq!(Section::Finger.color(), "darkred");
        assert_eq!(Section::Fn.color(), "darkgreen");
        assert_eq!(Section::Thumb.color(), "darkslategrey");
    }
}
