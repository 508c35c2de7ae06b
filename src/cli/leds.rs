//! Leds command: firmware C source in, LED signal reference sheet out.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::parser;
use clap::Args;
use std::path::PathBuf;

/// Render the LED signal reference sheet
#[derive(Debug, Clone, Args)]
pub struct LedsArgs {
    /// Path to the firmware C source holding the LED tables
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output SVG filename ("-" for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "leds.svg")]
    pub output: String,

    /// Page width in mm
    #[arg(long, value_name = "MM", default_value_t = 200)]
    pub width: i32,

    /// Page height in mm
    #[arg(long, value_name = "MM", default_value_t = 290)]
    pub height: i32,

    /// Sheet title drawn at the top of the page
    #[arg(long, value_name = "TEXT", default_value = "LED signals")]
    pub title: String,
}

impl LedsArgs {
    /// Execute the leds command
    pub fn execute(&self) -> CliResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(CliError::validation(format!(
                "Page dimensions must be positive, got {}x{} mm",
                self.width, self.height
            )));
        }
        let tables = parser::parse_led_tables(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load LED tables: {e}")))?;
        if tables.signals.is_empty() {
            return Err(CliError::validation(format!(
                "No LED signal tables found in {}",
                self.input.display()
            )));
        }
        let count = export::render_led_sheet(
            &tables,
            &self.output,
            self.width,
            self.height,
            &self.title,
        )
        .map_err(|e| CliError::io(format!("Rendering failed: {e}")))?;
        if self.output != "-" {
            println!("✓ Rendered {count} LED signal(s) to {}", self.output);
        }
        Ok(())
    }
}
