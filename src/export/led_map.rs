//! LED signal reference sheet.
//!
//! Renders one page: for every extracted LED signal, a key-grid pad with
//! the physical LED positions drawn as circles, the signal's LEDs lit in
//! their colors, and the blink pattern plotted as two line rows under the
//! pad. The sheet has its own spacing and styles; unlike the chord sheet it
//! never paginates.

use crate::constants::{
    FRAME_THICKNESS, KEY_RADIUS, KEY_SEP, KEY_SIZE, PAD_SIZE,
};
use crate::export::canvas::SvgCanvas;
use crate::models::{BlinkPattern, LedTables};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

const LED_PAGE_MARGIN: i32 = PAD_SIZE / 2;
const LED_PAD_SEP: i32 = 1000;
const FRAME_SIZE: i32 = PAD_SIZE + FRAME_THICKNESS + 2 * KEY_SEP;
const BLINK_HEIGHT: i32 = 400;
const BLINK_THICKNESS: i32 = 100;
const LEGEND_HEIGHT: i32 = 400;
/// Horizontal user units per blink tick.
const BLINK_UNIT: i32 = 3;

const COLOR_RED: &str = "crimson";
const COLOR_GREEN: &str = "limeGreen";
const COLOR_OFF: &str = "whitesmoke";
const COLOR_LEGEND: &str = "black";

const FRAME_STYLE: &str = "stroke:lightgrey;fill:white";
const KEY_STYLE: &str = "stroke:lightgrey;stroke-width:30;fill:white";
const LEGEND_STYLE: &str = "text-anchor:middle;font-family:'DejaVu Sans';\
font-stretch:semi-condensed;dominant-baseline:bottom;font-size:300px;fill:black";
const HEADER_STYLE: &str = "text-anchor:left;font-family:'DejaVu Sans';font-weight:bold;\
font-stretch:normal;dominant-baseline:bottom;font-size:400px;fill:black";

/// Physical position and color of one status LED, relative to the pad origin.
struct LedPosition {
    x: i32,
    y: i32,
    color: &'static str,
}

/// The 12 status LEDs around and inside the key grid.
const LED_LAYOUT: [LedPosition; 12] = [
    LedPosition { x: PAD_SIZE / 2 - (KEY_SIZE + KEY_SEP), y: PAD_SIZE, color: COLOR_RED },
    LedPosition { x: PAD_SIZE / 2 + (KEY_SIZE + KEY_SEP), y: PAD_SIZE, color: COLOR_RED },
    LedPosition { x: PAD_SIZE, y: PAD_SIZE / 2 + (KEY_SIZE + KEY_SEP), color: COLOR_GREEN },
    LedPosition { x: PAD_SIZE, y: PAD_SIZE / 2, color: COLOR_RED },
    LedPosition { x: PAD_SIZE, y: PAD_SIZE / 2 - (KEY_SIZE + KEY_SEP), color: COLOR_GREEN },
    LedPosition { x: PAD_SIZE / 2, y: KEY_SIZE / 6, color: COLOR_GREEN },
    LedPosition { x: PAD_SIZE / 2, y: KEY_SIZE / 6 * 3, color: COLOR_RED },
    LedPosition { x: PAD_SIZE / 2, y: KEY_SIZE / 6 * 5, color: COLOR_GREEN },
    LedPosition { x: PAD_SIZE / 2, y: PAD_SIZE / 2, color: COLOR_RED },
    LedPosition { x: 0, y: PAD_SIZE / 2 - (KEY_SIZE + KEY_SEP), color: COLOR_GREEN },
    LedPosition { x: 0, y: PAD_SIZE / 2, color: COLOR_RED },
    LedPosition { x: 0, y: PAD_SIZE / 2 + (KEY_SIZE + KEY_SEP), color: COLOR_GREEN },
];

/// Renders the LED signal sheet to `target` (`-` for stdout).
pub fn render_led_sheet(
    tables: &LedTables,
    target: &str,
    width_mm: i32,
    height_mm: i32,
    title: &str,
) -> Result<usize> {
    if width_mm <= 0 || height_mm <= 0 {
        anyhow::bail!("Page dimensions must be positive, got {width_mm}x{height_mm} mm");
    }
    let columns = (width_mm * 100 - 2 * LED_PAGE_MARGIN + LED_PAD_SEP) / (PAD_SIZE + LED_PAD_SEP);
    if columns < 1 {
        anyhow::bail!("Page width {width_mm} mm is too narrow for a single LED pad column");
    }
    let writer: Box<dyn Write> = if target == "-" {
        Box::new(io::stdout())
    } else {
        let file = File::create(target)
            .with_context(|| format!("Failed to create output file {target}"))?;
        Box::new(BufWriter::new(file))
    };

    let mut canvas = SvgCanvas::new(writer);
    canvas.start_document(width_mm, height_mm, width_mm * 100, height_mm * 100)?;
    canvas.title(title)?;
    canvas.text(
        LED_PAGE_MARGIN,
        LED_PAGE_MARGIN + 500,
        title,
        HEADER_STYLE,
    )?;
    let top_offset = 2 * LED_PAGE_MARGIN;
    for (index, (legend, signal)) in tables.signals.iter().enumerate() {
        let leds = tables
            .led_sets
            .get(&signal.led_set)
            .map_or(&[] as &[usize], Vec::as_slice);
        let pattern = tables
            .blink_patterns
            .get(&signal.blink_pattern)
            .copied()
            .unwrap_or_default();
        draw_signal(
            &mut canvas,
            index as i32,
            columns,
            top_offset,
            legend,
            leds,
            pattern,
        )?;
    }
    canvas.end_document()?;
    Ok(tables.signals.len())
}

fn draw_signal(
    canvas: &mut SvgCanvas<Box<dyn Write>>,
    index: i32,
    columns: i32,
    top_offset: i32,
    legend: &str,
    leds: &[usize],
    pattern: BlinkPattern,
) -> Result<()> {
    let grid_col = index % columns;
    let grid_row = index / columns;
    let x = LED_PAGE_MARGIN + grid_col * (PAD_SIZE + LED_PAD_SEP);
    let y = LED_PAGE_MARGIN
        + grid_row * (LEGEND_HEIGHT + PAD_SIZE + BLINK_HEIGHT + LED_PAD_SEP)
        + top_offset;
    let frame_x = x - FRAME_THICKNESS / 2 - KEY_SEP;
    let frame_y = y - FRAME_THICKNESS / 2 - KEY_SEP;
    let y_upper = y + PAD_SIZE + FRAME_THICKNESS + BLINK_HEIGHT / 2;
    let y_lower = y_upper + BLINK_THICKNESS;

    canvas.rounded_rect(
        frame_x,
        frame_y,
        FRAME_SIZE,
        FRAME_SIZE,
        KEY_RADIUS,
        &format!("{FRAME_STYLE};stroke-width:{FRAME_THICKNESS}"),
    )?;
    for visual_row in 0..4i32 {
        let mut col = 0i32;
        let mut key_col = 0i32;
        while key_col < 4 {
            let key_x = x + key_col * (KEY_SIZE + KEY_SEP);
            let key_y = y + visual_row * (KEY_SIZE + KEY_SEP);
            if visual_row == 3 && col == 1 {
                canvas.rounded_rect(
                    key_x,
                    key_y,
                    2 * KEY_SIZE + KEY_SEP,
                    KEY_SIZE,
                    KEY_RADIUS,
                    KEY_STYLE,
                )?;
                key_col += 1;
            } else {
                canvas.rounded_rect(key_x, key_y, KEY_SIZE, KEY_SIZE, KEY_RADIUS, KEY_STYLE)?;
            }
            col += 1;
            key_col += 1;
        }
    }

    for led in &LED_LAYOUT {
        canvas.circle(
            x + led.x,
            y + led.y,
            KEY_SIZE / 6,
            &format!("fill:{COLOR_OFF};stroke:{COLOR_LEGEND};stroke-width:7"),
        )?;
    }
    let mut green_used = false;
    let mut red_used = false;
    for &number in leds {
        if let Some(led) = LED_LAYOUT.get(number) {
            canvas.circle(
                x + led.x,
                y + led.y,
                KEY_SIZE / 6,
                &format!("fill:{}", led.color),
            )?;
            green_used |= led.color == COLOR_GREEN;
            red_used |= led.color == COLOR_RED;
        }
    }
    let upper_color = if green_used { COLOR_GREEN } else { COLOR_RED };
    let lower_color = if red_used { COLOR_RED } else { COLOR_GREEN };

    canvas.text(
        x + PAD_SIZE / 2,
        y - FRAME_THICKNESS - LEGEND_HEIGHT / 2,
        legend,
        LEGEND_STYLE,
    )?;

    let mut x_end = 0;
    for (span_start, span_end) in blink_sequence(pattern) {
        let x_start = frame_x + span_start;
        x_end = frame_x + span_end;
        canvas.line(
            x_start,
            y_upper,
            x_end,
            y_upper,
            &format!("stroke:{upper_color};stroke-width:{BLINK_THICKNESS}"),
        )?;
        canvas.line(
            x_start,
            y_lower,
            x_end,
            y_lower,
            &format!("stroke:{lower_color};stroke-width:{BLINK_THICKNESS}"),
        )?;
    }
    if pattern.is_forever() {
        // Dashed tail marking a pattern that repeats until cancelled.
        canvas.line(
            x_end + 50,
            (y_upper + y_lower) / 2,
            frame_x + FRAME_SIZE,
            (y_upper + y_lower) / 2,
            &format!(
                "stroke:{COLOR_LEGEND};stroke-width:{};stroke-dasharray:10 50",
                2 * BLINK_THICKNESS
            ),
        )?;
    }
    Ok(())
}

/// Expands a blink pattern into on-phase line spans across the pad width.
fn blink_sequence(pattern: BlinkPattern) -> Vec<(i32, i32)> {
    let mut spans = Vec::new();
    if pattern.cycles == 0 || pattern.on + pattern.off <= 0 {
        return spans;
    }
    let mut x0 = 0;
    let mut x1 = pattern.on * BLINK_UNIT;
    let mut cycles = pattern.cycles;
    while x0 < PAD_SIZE && x1 < PAD_SIZE && cycles != 0 {
        spans.push((x0, x1));
        x0 = x1 + pattern.off * BLINK_UNIT;
        x1 += (pattern.off + pattern.on) * BLINK_UNIT;
        cycles -= 1;
    }
    spans
}
