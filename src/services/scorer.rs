//! Chord ergonomics scoring.
//!
//! Scores a chord by the geometric pattern of its finger presses: chords on
//! a single row are easy, adjacent-row transitions cost a little, zigzags
//! and steep row jumps cost more. The numeric thresholds are empirically
//! tuned display heuristics; the legend groupings on the sheet depend on the
//! exact ordering they produce, so they must not be "improved".

use crate::models::Chord;

/// Row transition between a pressed finger column and the next pressed one.
#[derive(Debug, Clone, Copy, Default)]
struct Step {
    /// Row delta to the next pressed column.
    delta: i32,
    /// Number of columns the transition spans.
    col_span: i32,
    valid: bool,
}

/// Computes the ease-of-use score for a chord. Lower is easier.
///
/// Pure and total for every chord satisfying the press-matrix invariant
/// (at most one pressed finger row per column).
#[must_use]
pub fn quality(chord: &Chord) -> i32 {
    let (fingers, _) = chord.flat();
    let steps = steps(&fingers);
    let (min_step, max_step) = step_bounds(&steps);
    let sum_abs: i32 = steps.iter().filter(|s| s.valid).map(|s| s.delta.abs()).sum();
    let (min_row, max_row, n_cols) = row_bounds(&fingers);

    let tier = if max_step.delta == 0 {
        // Single row used.
        n_cols + row_quality(min_row)
    } else if sum_abs == 1 {
        // Two adjacent rows, no zigzag.
        6 + n_cols + row_quality(min_row)
    } else if max_row - min_row <= 1 && max_step.delta.abs() == 1 {
        // Two adjacent rows, zigzag.
        8 + n_cols + row_quality(min_row)
    } else if sum_abs == 2 && min_step.delta.abs() == 1 && max_step.delta.abs() == 1 {
        // Straight diagonal across three columns.
        15
    } else if max_slope(&steps) <= 1 {
        // Three rows, no steep steps.
        14 + n_cols + corner_bonus(&fingers)
    } else {
        // Awkward row jumps between adjacent columns.
        16 + n_cols + corner_bonus(&fingers)
    };
    tier * 9 / 22
}

/// Per-row comfort adjustment: the home row is free, the top row costs 1,
/// the bottom row costs 2.
fn row_quality(row: i32) -> i32 {
    match row {
        1 => 1,
        3 => 2,
        _ => 0,
    }
}

/// Penalty for chords anchored on an outermost bottom-row key.
fn corner_bonus(fingers: &[u8; 4]) -> i32 {
    if fingers[0] == 3 || fingers[3] == 3 {
        2
    } else {
        0
    }
}

/// For each pressed column, the row transition to the next pressed column.
/// Columns with no later pressed column contribute no step.
fn steps(fingers: &[u8; 4]) -> [Step; 3] {
    let mut steps = [Step::default(); 3];
    for i in 0..3 {
        if fingers[i] == 0 {
            continue;
        }
        for j in i + 1..fingers.len() {
            if fingers[j] != 0 {
                steps[i] = Step {
                    delta: i32::from(fingers[j]) - i32::from(fingers[i]),
                    col_span: (j - i) as i32,
                    valid: true,
                };
                break;
            }
        }
    }
    steps
}

/// Smallest and largest step by absolute magnitude; ties keep the first seen.
fn step_bounds(steps: &[Step; 3]) -> (Step, Step) {
    let mut min = Step {
        delta: i32::MAX,
        ..Step::default()
    };
    let mut max = Step::default();
    for s in steps.iter().filter(|s| s.valid) {
        if s.delta.abs() > max.delta.abs() {
            max = *s;
        }
        if s.delta.abs() < min.delta.abs() {
            min = *s;
        }
    }
    (min, max)
}

/// Steepest per-column row change over all steps, with integer division.
fn max_slope(steps: &[Step; 3]) -> i32 {
    steps
        .iter()
        .filter(|s| s.valid)
        .map(|s| s.delta.abs() / s.col_span)
        .max()
        .unwrap_or(0)
}

/// Smallest and largest pressed finger row plus the pressed-column count.
fn row_bounds(fingers: &[u8; 4]) -> (i32, i32, i32) {
    let mut min = i32::MAX;
    let mut max = 0;
    let mut n_cols = 0;
    for &row in fingers {
        if row != 0 {
            min = min.min(i32::from(row));
            max = max.max(i32::from(row));
            n_cols += 1;
        }
    }
    (min, max, n_cols)
}
