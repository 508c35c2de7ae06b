//! Streaming layout and pagination engine.
//!
//! The engine is the single consumer of the draw-item stream and the sole
//! owner of the open output surface. Pads tile the page grid in row-major
//! order; when a placement would cross the bottom margin the engine
//! finalizes the current page, opens the next one and retries the same item
//! exactly once. The page geometry validation guarantees the retry fits, so
//! items are never dropped or reordered.

use crate::constants::{
    FRAME_SIZE, FRAME_STYLE, FRAME_THICKNESS, HEADER_STYLE, KEY_RADIUS, KEY_SEP, KEY_SIZE,
    LEGEND_STYLE, PAD_HEADER_STYLE, PAD_SEP, PAD_SIZE, PAGE_MARGIN, PRESSED_STYLE, QUALITY_STYLE,
    RELEASED_STYLE,
};
use crate::export::canvas::SvgCanvas;
use crate::export::page::{next_filename, PageGeometry, SheetTarget};
use crate::models::{ChordPad, DrawItem};
use crate::services::scorer;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::mpsc::Receiver;

/// Configuration for one rendering run.
#[derive(Debug, Clone)]
pub struct SheetOptions {
    /// Output target: a sequenceable filename, or `-` for stdout.
    pub target: String,
    /// Page width in millimetres.
    pub width_mm: i32,
    /// Page height in millimetres.
    pub height_mm: i32,
    /// Sheet title; each page embeds it together with its page number.
    pub title: String,
}

/// Engine-owned tiling state, reset whenever a new surface opens.
#[derive(Debug, Clone, Copy, Default)]
struct LayoutCursor {
    /// Pads placed since the last section realignment on this page.
    pad_index: usize,
    /// Extra vertical space consumed by section headers.
    vertical_offset: i32,
    /// Top edge of the most recently computed pad position; the section
    /// header fit rule reads it.
    last_y: i32,
}

type SurfaceWriter = Box<dyn Write + Send>;

/// The layout/pagination engine. Owns the output surface and cursor.
pub(crate) struct SheetEngine {
    geometry: PageGeometry,
    target: SheetTarget,
    title: String,
    /// Filename of the currently open page, in file-target mode.
    filename: Option<String>,
    canvas: SvgCanvas<SurfaceWriter>,
    cursor: LayoutCursor,
    /// Completed page switches; the open page is number `pages + 1`.
    pages: usize,
}

impl SheetEngine {
    /// Validates the configuration and opens the first output surface.
    pub(crate) fn new(options: &SheetOptions) -> Result<Self> {
        let geometry = PageGeometry::new(options.width_mm, options.height_mm)?;
        let target = SheetTarget::parse(&options.target)?;
        let (writer, filename): (SurfaceWriter, Option<String>) = match &target {
            SheetTarget::Stdout => (Box::new(io::stdout()), None),
            SheetTarget::File(name) => {
                let first = next_filename(name)?;
                let file = File::create(&first)
                    .with_context(|| format!("Failed to create output file {first}"))?;
                (Box::new(BufWriter::new(file)), Some(first))
            }
        };
        let mut engine = Self {
            geometry,
            target,
            title: options.title.clone(),
            filename,
            canvas: SvgCanvas::new(writer),
            cursor: LayoutCursor::default(),
            pages: 0,
        };
        engine.open_document()?;
        Ok(engine)
    }

    /// Consumes the stream until the sender hangs up, then finalizes the
    /// last page. Returns the number of pages emitted.
    pub(crate) fn run(mut self, items: &Receiver<DrawItem>) -> Result<usize> {
        while let Ok(item) = items.recv() {
            self.process(item)?;
        }
        self.finalize()
    }

    /// Places one item, switching pages at most once for it.
    pub(crate) fn process(&mut self, item: DrawItem) -> Result<()> {
        match item {
            DrawItem::Pad(pad) => {
                if !self.place_pad(&pad)? {
                    self.switch_page()?;
                    if !self.place_pad(&pad)? {
                        anyhow::bail!("chord pad does not fit on an empty page");
                    }
                }
            }
            DrawItem::SectionHeader(text) => {
                if !self.place_header(&text)? {
                    self.switch_page()?;
                    if !self.place_header(&text)? {
                        anyhow::bail!("section header does not fit on an empty page");
                    }
                }
            }
            DrawItem::PageBreak => {
                self.cursor.last_y = 0;
                self.switch_page()?;
            }
        }
        Ok(())
    }

    /// Finalizes the open page and reports the total page count.
    pub(crate) fn finalize(mut self) -> Result<usize> {
        self.canvas
            .end_document()
            .context("Failed to finalize output page")?;
        Ok(self.pages + 1)
    }

    /// Starts a new document on the open surface: resets the cursor and
    /// emits the page header markup.
    fn open_document(&mut self) -> Result<()> {
        self.cursor.pad_index = 0;
        self.cursor.vertical_offset = PAGE_MARGIN;
        self.canvas.start_document(
            self.geometry.width_mm,
            self.geometry.height_mm,
            self.geometry.page_width(),
            self.geometry.page_height,
        )?;
        self.canvas
            .title(&format!("{} (p. {})", self.title, self.pages + 1))?;
        Ok(())
    }

    /// Closes the current page and opens the next one. On a file target the
    /// next page gets the next filename in the sequence; on stdout the SVG
    /// document restarts on the same stream.
    fn switch_page(&mut self) -> Result<()> {
        self.canvas
            .end_document()
            .context("Failed to finalize output page")?;
        self.pages += 1;
        if let SheetTarget::File(_) = &self.target {
            let current = self
                .filename
                .as_deref()
                .context("File target without a current filename")?;
            let name = next_filename(current)?;
            let file = File::create(&name)
                .with_context(|| format!("Failed to create output file {name}"))?;
            self.canvas = SvgCanvas::new(Box::new(BufWriter::new(file)));
            self.filename = Some(name);
        }
        self.open_document()
    }

    /// Draws a chord pad at the cursor's grid cell. Returns `false` without
    /// drawing when the pad would cross the bottom margin.
    fn place_pad(&mut self, pad: &ChordPad) -> Result<bool> {
        let grid_col = (self.cursor.pad_index % self.geometry.columns) as i32;
        let grid_row = (self.cursor.pad_index / self.geometry.columns) as i32;
        let x = PAGE_MARGIN + grid_col * (PAD_SIZE + PAD_SEP);
        let y = PAGE_MARGIN + grid_row * (PAD_SIZE + PAD_SEP) + self.cursor.vertical_offset;
        self.cursor.last_y = y;
        if y + PAD_SIZE + PAGE_MARGIN > self.geometry.page_height {
            return Ok(false);
        }

        let color = pad.section.color();
        let (fingers, thumbs) = pad.chord.flat();
        self.canvas.begin_group(&format!(
            "title=\"{}{}{}{} {}{}{}\"",
            fingers[0], fingers[1], fingers[2], fingers[3], thumbs[0], thumbs[1], thumbs[2]
        ))?;
        self.canvas.rounded_rect(
            x - FRAME_THICKNESS / 2 - KEY_SEP,
            y - FRAME_THICKNESS / 2 - KEY_SEP,
            FRAME_SIZE,
            FRAME_SIZE,
            KEY_RADIUS,
            &format!("{FRAME_STYLE};stroke:{color};stroke-width:{FRAME_THICKNESS}"),
        )?;
        self.draw_keys(pad, x, y, color)?;
        if !pad.suppress_quality {
            self.canvas.text(
                x + PAD_SIZE + KEY_SEP,
                y + PAD_SIZE + KEY_SEP,
                &scorer::quality(&pad.chord).to_string(),
                &format!("{QUALITY_STYLE};fill:{color}"),
            )?;
        }
        self.draw_legend(pad, x, y)?;
        if let Some(header) = &pad.header {
            let style = pad.header_style.as_deref().unwrap_or(PAD_HEADER_STYLE);
            self.canvas
                .text(x - PAD_SEP / 2, y + PAD_SIZE, header, style)?;
        }
        self.canvas.end_group()?;
        self.cursor.pad_index += 1;
        Ok(true)
    }

    /// Draws the 4x4 key grid. The physical thumb key is one double-width
    /// cell spanning logical columns 1-2 of the bottom visual row.
    fn draw_keys(&mut self, pad: &ChordPad, x: i32, y: i32, color: &str) -> Result<()> {
        for visual_row in 0..4i32 {
            let mut col = 0usize;
            let mut key_col = 0i32;
            while key_col < 4 {
                let style = if pad.chord.is_pressed(visual_row as usize + 1, col) {
                    format!("{PRESSED_STYLE};stroke:{color};fill:{color}")
                } else {
                    format!("{RELEASED_STYLE};stroke:{color}")
                };
                let key_x = x + key_col * (KEY_SIZE + KEY_SEP);
                let key_y = y + visual_row * (KEY_SIZE + KEY_SEP);
                if visual_row == 3 && col == 1 {
                    self.canvas.rounded_rect(
                        key_x,
                        key_y,
                        2 * KEY_SIZE + KEY_SEP,
                        KEY_SIZE,
                        KEY_RADIUS,
                        &style,
                    )?;
                    key_col += 1;
                } else {
                    self.canvas
                        .rounded_rect(key_x, key_y, KEY_SIZE, KEY_SIZE, KEY_RADIUS, &style)?;
                }
                col += 1;
                key_col += 1;
            }
        }
        Ok(())
    }

    /// Draws the pad legend: a large outlined glyph, up to three stacked
    /// legend words, or the modifier list with its duration annotation.
    fn draw_legend(&mut self, pad: &ChordPad, x: i32, y: i32) -> Result<()> {
        let center_x = x + PAD_SIZE / 2;
        let line_style = format!(
            "{LEGEND_STYLE};fill-opacity:0.5;dominant-baseline:middle;font-size:{KEY_SIZE}px"
        );
        if pad.legend_is_glyph {
            self.canvas.text(
                center_x,
                y + PAD_SIZE * 3 / 4,
                &pad.legend,
                &format!(
                    "{LEGEND_STYLE};font-size:{}px;font-weight:bold;fill-opacity:0;\
                     stroke-opacity:0.5;stroke:black;stroke-width:{}px",
                    PAD_SIZE - KEY_SIZE,
                    KEY_SEP / 2
                ),
            )?;
        } else if pad.modifiers.is_empty() {
            let parts: Vec<&str> = pad.legend.splitn(3, ' ').collect();
            let n_parts = parts.len() as i32;
            for (i, part) in parts.iter().enumerate() {
                let y_offset = KEY_SIZE / 2 * (2 * i as i32 - n_parts + 1);
                self.canvas
                    .text(center_x, y + PAD_SIZE / 2 + y_offset, part, &line_style)?;
            }
        } else {
            let n_mods = pad.modifiers.len() as i32;
            for (i, name) in pad.modifiers.iter().enumerate() {
                let y_offset = KEY_SIZE / 2 * (2 * i as i32 - n_mods);
                self.canvas
                    .text(center_x, y + PAD_SIZE / 2 + y_offset, name, &line_style)?;
            }
            if let Some(duration) = &pad.modifier_duration {
                let y_offset = KEY_SIZE / 2 * n_mods;
                self.canvas
                    .text(center_x, y + PAD_SIZE / 2 + y_offset, duration, &line_style)?;
            }
        }
        Ok(())
    }

    /// Draws a section header at the left margin, realigning the tiling
    /// cursor to the start of the next pad row. Returns `false` without
    /// drawing when the header's footprint would not fit.
    fn place_header(&mut self, text: &str) -> Result<bool> {
        if self.cursor.last_y + 2 * (PAD_SIZE + PAGE_MARGIN) > self.geometry.page_height {
            self.cursor.last_y = 0;
            return Ok(false);
        }
        self.cursor.vertical_offset += PAD_SEP;
        let remainder =
            (self.geometry.columns - self.cursor.pad_index % self.geometry.columns)
                % self.geometry.columns;
        self.cursor.pad_index += remainder;
        if remainder > 0 {
            self.cursor.vertical_offset += PAD_SIZE + PAD_SEP;
        }
        self.canvas.text(
            PAGE_MARGIN,
            self.cursor.last_y + self.cursor.vertical_offset,
            text,
            &format!("{HEADER_STYLE};font-size:{KEY_SIZE}px"),
        )?;
        Ok(true)
    }
}
