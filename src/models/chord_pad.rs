//! Display units consumed by the layout engine.

use crate::models::{Chord, Section};
use serde::{Deserialize, Serialize};

/// One rendered cheat-sheet entry: a chord diagram plus its annotations.
///
/// Pads are created once per input record (or synthesized for the
/// customization legend) and never mutated after the display-name
/// substitution pass that runs before sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordPad {
    /// The press-matrix to draw.
    pub chord: Chord,
    /// Keyboard zone, which selects the pad color.
    pub section: Section,
    /// Legend text shown inside the pad.
    pub legend: String,
    /// Whether the legend is a single glyph drawn as a large outlined character.
    pub legend_is_glyph: bool,
    /// Modifier names applied by this chord, in display order.
    pub modifiers: Vec<String>,
    /// Duration annotation for modifier chords, e.g. "(sticky)" or "(toggle)".
    pub modifier_duration: Option<String>,
    /// Annotation text drawn beside the pad.
    pub header: Option<String>,
    /// Style applied to the annotation text.
    pub header_style: Option<String>,
    /// Suppresses the ease-of-use badge in the pad corner.
    pub suppress_quality: bool,
}

impl ChordPad {
    /// Creates a pad with the given section and legend and no annotations.
    #[must_use]
    pub fn new(section: Section, legend: impl Into<String>) -> Self {
        Self {
            chord: Chord::new(),
            section,
            legend: legend.into(),
            legend_is_glyph: false,
            modifiers: Vec::new(),
            modifier_duration: None,
            header: None,
            header_style: None,
            suppress_quality: false,
        }
    }

    /// Sets the chord matrix.
    #[must_use]
    pub fn with_chord(mut self, chord: Chord) -> Self {
        self.chord = chord;
        self
    }

    /// Attaches an annotation header with its style.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>, style: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self.header_style = Some(style.into());
        self
    }

    /// Suppresses the ease-of-use badge.
    #[must_use]
    pub fn without_quality(mut self) -> Self {
        self.suppress_quality = true;
        self
    }
}

/// The unit of the draw-item stream.
///
/// Items are emitted by the producer and consumed strictly in order by the
/// layout engine; they are read-only once sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawItem {
    /// A chord pad to tile onto the page grid.
    Pad(ChordPad),
    /// A section header that forces the next pad onto a fresh tiling row.
    SectionHeader(String),
    /// An unconditional switch to a new page.
    PageBreak,
}
