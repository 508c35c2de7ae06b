//! LED signal tables extracted from the firmware source.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A firmware blink pattern: `on`/`off` phase lengths and a repeat count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkPattern {
    /// Length of the lit phase, in firmware ticks.
    pub on: i32,
    /// Length of the dark phase, in firmware ticks.
    pub off: i32,
    /// Number of on/off cycles; -1 means the pattern repeats forever.
    pub cycles: i32,
}

impl BlinkPattern {
    /// Whether the pattern repeats until cancelled.
    #[must_use]
    pub fn is_forever(self) -> bool {
        self.cycles == -1
    }
}

/// Binds a named LED set to a named blink pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedSignal {
    /// Name of the LED set lit by this signal.
    pub led_set: String,
    /// Name of the blink pattern driving the set.
    pub blink_pattern: String,
}

/// All LED tables extracted from one firmware source file.
///
/// Signals are keyed by their human-readable legend; the `BTreeMap` keeps
/// them in the sorted order the reference sheet is rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedTables {
    /// LED sets by name: the physical LED indices each set lights.
    pub led_sets: HashMap<String, Vec<usize>>,
    /// Blink patterns by name.
    pub blink_patterns: HashMap<String, BlinkPattern>,
    /// Signal bindings by legend.
    pub signals: BTreeMap<String, LedSignal>,
}
