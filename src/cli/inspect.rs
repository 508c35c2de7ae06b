//! Inspect command: dump parsed chord records with their ease scores.

use crate::cli::common::{CliError, CliResult};
use crate::models::{ChordPad, Section};
use crate::parser;
use crate::services;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Inspect parsed chord records and their ease scores
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the chordmap text dump ("-" for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "chordmap.txt")]
    pub input: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One record in the inspection report.
#[derive(Debug, Serialize)]
struct InspectRecord {
    legend: String,
    section: Section,
    quality: i32,
    fingers: [u8; 4],
    thumbs: [u8; 3],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    modifiers: Vec<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let mut pads = self.load_records()?;
        for pad in &mut pads {
            if let Some(name) = parser::special_key_name(&pad.legend) {
                pad.legend = name.to_string();
            }
        }
        services::sort_for_display(&mut pads);

        let records: Vec<InspectRecord> = pads
            .iter()
            .map(|pad| {
                let (fingers, thumbs) = pad.chord.flat();
                InspectRecord {
                    legend: pad.legend.clone(),
                    section: pad.section,
                    quality: services::quality(&pad.chord),
                    fingers,
                    thumbs,
                    modifiers: pad.modifiers.clone(),
                }
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| CliError::io(format!("Failed to serialize records: {e}")))?;
            println!("{json}");
        } else {
            print_table(&records);
        }
        Ok(())
    }

    fn load_records(&self) -> CliResult<Vec<ChordPad>> {
        if self.input == "-" {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
            Ok(parser::parse_chordmap_str(&content))
        } else {
            parser::parse_chordmap(Path::new(&self.input))
                .map_err(|e| CliError::io(format!("Failed to load chordmap: {e}")))
        }
    }
}

fn print_table(records: &[InspectRecord]) {
    println!("{:<20} {:<8} {:>5}  {:<9} {:<5}", "LEGEND", "SECTION", "EASE", "FINGERS", "THUMBS");
    for r in records {
        let section = match r.section {
            Section::Thumb => "thumb",
            Section::Finger => "finger",
            Section::Fn => "fn",
        };
        let fingers: String = r.fingers.iter().map(ToString::to_string).collect();
        let thumbs: String = r.thumbs.iter().map(ToString::to_string).collect();
        let mods = if r.modifiers.is_empty() {
            String::new()
        } else {
            format!("  [{}]", r.modifiers.join(", "))
        };
        println!(
            "{:<20} {:<8} {:>5}  {:<9} {:<5}{mods}",
            r.legend, section, r.quality, fingers, thumbs
        );
    }
    println!("{} record(s)", records.len());
}
