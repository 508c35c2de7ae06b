//! Render command: chordmap text dump in, SVG cheat-sheet pages out.

use crate::cli::common::{CliError, CliResult};
use crate::constants::{COLOR_GREEN, COLOR_GREY, COLOR_RED, PAD_HEADER_STYLE};
use crate::export::{PageGeometry, SheetOptions, SheetTarget, SheetWriter};
use crate::models::{Chord, ChordPad, DrawItem, Section};
use crate::parser;
use crate::services;
use clap::Args;
use std::io::Read;
use std::path::Path;

/// Render the chord cheat-sheet SVG pages
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to the chordmap text dump ("-" for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "chordmap.txt")]
    pub input: String,

    /// Output SVG filename, sequenced per page ("-" for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "chordmap.svg")]
    pub output: String,

    /// Page width in mm
    #[arg(long, value_name = "MM", default_value_t = 200)]
    pub width: i32,

    /// Page height in mm
    #[arg(long, value_name = "MM", default_value_t = 290)]
    pub height: i32,

    /// Sheet title embedded in every page
    #[arg(long, value_name = "TEXT", default_value = "chordmap")]
    pub title: String,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        // Reject bad page geometry and output patterns before reading input.
        PageGeometry::new(self.width, self.height)
            .map_err(|e| CliError::validation(e.to_string()))?;
        SheetTarget::parse(&self.output).map_err(|e| CliError::validation(e.to_string()))?;

        let records = load_records(&self.input)?;
        let stream = build_stream(records);

        let mut writer = SheetWriter::spawn(&SheetOptions {
            target: self.output.clone(),
            width_mm: self.width,
            height_mm: self.height,
            title: self.title.clone(),
        })
        .map_err(|e| CliError::io(format!("Failed to start rendering: {e}")))?;
        for item in stream {
            writer
                .put(item)
                .map_err(|e| CliError::io(format!("Rendering failed: {e}")))?;
        }
        let pages = writer
            .finish()
            .map_err(|e| CliError::io(format!("Rendering failed: {e}")))?;

        if self.output != "-" {
            println!("✓ Rendered {pages} page(s) to {}", self.output);
        }
        Ok(())
    }
}

/// Reads and parses chord records from a file or stdin.
fn load_records(input: &str) -> CliResult<Vec<ChordPad>> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
        Ok(parser::parse_chordmap_str(&content))
    } else {
        parser::parse_chordmap(Path::new(input))
            .map_err(|e| CliError::io(format!("Failed to load chordmap: {e}")))
    }
}

/// Turns parsed records into the ordered draw-item stream.
///
/// Display names are substituted first, then each section is sorted, then
/// the sections are emitted with their headers: simple chords, modifier
/// chords, the unused chords on their own page, and the fixed customization
/// legend.
fn build_stream(records: Vec<ChordPad>) -> Vec<DrawItem> {
    let mut simple = Vec::new();
    let mut modifier_chords = Vec::new();
    let mut unused = Vec::new();
    for mut pad in records {
        if let Some(name) = parser::special_key_name(&pad.legend) {
            pad.legend = name.to_string();
            simple.push(pad);
        } else if pad.legend_is_glyph {
            simple.push(pad);
        } else if pad.legend == "modifiers" {
            modifier_chords.push(pad);
        } else if pad.legend == "no" && !pad.chord.is_empty() {
            pad.legend = "[empty]".to_string();
            unused.push(pad);
        }
    }
    services::sort_for_display(&mut simple);
    services::sort_for_display(&mut modifier_chords);
    services::sort_for_display(&mut unused);

    let mut stream = Vec::new();
    stream.push(DrawItem::SectionHeader("Simple Chords".to_string()));
    stream.extend(simple.into_iter().map(DrawItem::Pad));
    stream.push(DrawItem::SectionHeader("Modifiers".to_string()));
    stream.extend(modifier_chords.into_iter().map(DrawItem::Pad));
    stream.push(DrawItem::PageBreak);
    stream.push(DrawItem::SectionHeader("Unused Chords".to_string()));
    stream.extend(unused.into_iter().map(DrawItem::Pad));
    stream.push(DrawItem::SectionHeader("Customization".to_string()));
    stream.extend(customization_pads().into_iter().map(DrawItem::Pad));
    stream
}

/// The fixed legend explaining pad colors, swappability and the ease badge.
fn customization_pads() -> Vec<ChordPad> {
    let centered = format!("{PAD_HEADER_STYLE};text-anchor:middle");
    let left = format!("{PAD_HEADER_STYLE};text-anchor:left");
    vec![
        ChordPad::new(Section::Finger, "red 1").without_quality(),
        ChordPad::new(Section::Finger, "red 2")
            .without_quality()
            .with_header("swappable", format!("{centered};fill:{COLOR_RED}")),
        ChordPad::new(Section::Fn, "green 1").without_quality(),
        ChordPad::new(Section::Fn, "green 2")
            .without_quality()
            .with_header("swappable", format!("{centered};fill:{COLOR_GREEN}")),
        ChordPad::new(Section::Finger, "red 1").without_quality(),
        ChordPad::new(Section::Fn, "green 2")
            .without_quality()
            .with_header("unswappable", centered),
        ChordPad::new(Section::Thumb, "grey")
            .without_quality()
            .with_header("\u{a0}immutable", format!("{left};fill:{COLOR_GREY}")),
        ChordPad::new(Section::Finger, "excellent")
            .with_chord(Chord::from_presses(&[(2, 1)]))
            .with_header("\u{a0}\u{a0}\u{a0}ease", left.clone()),
        ChordPad::new(Section::Finger, "fair")
            .with_chord(Chord::from_presses(&[(2, 0), (3, 1), (3, 2), (3, 3)]))
            .with_header("\u{a0}\u{a0}\u{a0}ease", left.clone()),
        ChordPad::new(Section::Finger, "poor")
            .with_chord(Chord::from_presses(&[(1, 2), (2, 0), (3, 1), (3, 3)]))
            .with_header("\u{a0}\u{a0}\u{a0}ease", left),
    ]
}
