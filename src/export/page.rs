//! Page geometry and output-target handling.
//!
//! All layout constraints are derived once from the configured page size;
//! the derivation also validates the retry-once contract of the layout
//! engine: a pad or section header must always fit on a freshly opened
//! page, so undersized pages are rejected before any surface opens.

use crate::constants::{PAD_SEP, PAD_SIZE, PAGE_MARGIN};
use anyhow::Result;
use regex::Regex;

/// Fixed per-run page layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    /// Page width in millimetres.
    pub width_mm: i32,
    /// Page height in millimetres.
    pub height_mm: i32,
    /// Number of pad columns that fit on one page.
    pub columns: usize,
    /// Page height in user units (hundredths of a millimetre).
    pub page_height: i32,
}

impl PageGeometry {
    /// Derives the layout parameters for a page of the given size.
    ///
    /// # Errors
    ///
    /// Rejects non-positive dimensions, a width too narrow for a single pad
    /// column, and a height too short to satisfy the engine's guarantee
    /// that any item fits on an empty page.
    pub fn new(width_mm: i32, height_mm: i32) -> Result<Self> {
        if width_mm <= 0 || height_mm <= 0 {
            anyhow::bail!("Page dimensions must be positive, got {width_mm}x{height_mm} mm");
        }
        let page_width = width_mm * 100;
        let page_height = height_mm * 100;
        let columns = (page_width - 2 * PAGE_MARGIN + PAD_SEP) / (PAD_SIZE + PAD_SEP);
        if columns < 1 {
            anyhow::bail!("Page width {width_mm} mm is too narrow for a single chord pad column");
        }
        if page_height < 2 * (PAD_SIZE + PAGE_MARGIN) {
            anyhow::bail!(
                "Page height {height_mm} mm is too short; at least {} mm is required",
                ((2 * (PAD_SIZE + PAGE_MARGIN)) as u32).div_ceil(100)
            );
        }
        Ok(Self {
            width_mm,
            height_mm,
            columns: columns as usize,
            page_height,
        })
    }

    /// Page width in user units.
    #[must_use]
    pub fn page_width(&self) -> i32 {
        self.width_mm * 100
    }
}

/// Where the rendered pages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetTarget {
    /// Write every page to standard output; page switches restart the SVG
    /// document on the same stream.
    Stdout,
    /// Write each page to its own file, advancing the embedded page number.
    File(String),
}

impl SheetTarget {
    /// Parses an output target specification. `-` selects standard output;
    /// anything else must be a filename `next_filename` can sequence.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec == "-" {
            return Ok(Self::Stdout);
        }
        // Validate the pattern up front so a malformed name fails before
        // the first surface opens.
        next_filename(spec)?;
        Ok(Self::File(spec.to_string()))
    }
}

/// Derives the next filename in the page sequence.
///
/// Only the final path component is sequenced: its first numeric run is
/// incremented, preserving the zero-padding width; a name without digits
/// gets a `1` inserted before the extension.
///
/// # Errors
///
/// Fails for names with neither a numeric run nor an extension, and for
/// numeric runs too large to increment.
pub fn next_filename(path: &str) -> Result<String> {
    let path = std::path::Path::new(path);
    let name = path
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| anyhow::anyhow!("Output target {} has no filename", path.display()))?;
    let next = next_name_component(name)?;
    Ok(path.with_file_name(next).to_string_lossy().into_owned())
}

fn next_name_component(name: &str) -> Result<String> {
    let numbered = Regex::new(r"^([^0-9]*)([0-9]+)(.*)$").unwrap();
    if let Some(caps) = numbered.captures(name) {
        let digits = &caps[2];
        let number: u64 = digits
            .parse()
            .map_err(|_| anyhow::anyhow!("Numeric run in output filename {name:?} is too large"))?;
        return Ok(format!(
            "{}{:0width$}{}",
            &caps[1],
            number + 1,
            &caps[3],
            width = digits.len()
        ));
    }
    let extension = Regex::new(r"^(.+)\.([A-Za-z0-9]+)$").unwrap();
    let Some(caps) = extension.captures(name) else {
        anyhow::bail!(
            "Output filename {name:?} cannot be sequenced; use a name with a number or an extension"
        );
    };
    Ok(format!("{}1.{}", &caps[1], &caps[2]))
}
