//! Application-wide constants.
//!
//! Page and pad geometry is expressed in hundredths of a millimetre so that
//! every coordinate stays integral; the SVG viewBox is scaled accordingly.
//! The drawing styles are fixed presentation constants, not a theme system.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Chordsheet";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "chordsheet";

/// Edge length of one key cell.
pub const KEY_SIZE: i32 = 450;

/// Gap between adjacent key cells.
pub const KEY_SEP: i32 = 60;

/// Corner radius of key cells and pad frames.
pub const KEY_RADIUS: i32 = 60;

/// Edge length of a chord pad (4 key columns plus 3 gaps).
pub const PAD_SIZE: i32 = KEY_SIZE * 4 + KEY_SEP * 3;

/// Margin between the page edge and the first pad column/row.
pub const PAGE_MARGIN: i32 = 1200;

/// Horizontal and vertical separation between pads.
pub const PAD_SEP: i32 = 600;

/// Stroke width of the pad frame.
pub const FRAME_THICKNESS: i32 = 120;

/// Outer edge length of the pad frame.
pub const FRAME_SIZE: i32 = PAD_SIZE + FRAME_THICKNESS + 2 * KEY_SEP;

/// Section color for finger chords.
pub const COLOR_RED: &str = "darkred";

/// Section color for fn-layer chords.
pub const COLOR_GREEN: &str = "darkgreen";

/// Section color for thumb chords.
pub const COLOR_GREY: &str = "darkslategrey";

/// Base style of the pad frame; stroke color and width are appended per section.
pub const FRAME_STYLE: &str = "fill:white;stroke-opacity:0.2";

/// Style of a released key cell; stroke color is appended per section.
pub const RELEASED_STYLE: &str = "stroke-width:50;fill:white;stroke-opacity:0.2";

/// Style of a pressed key cell; stroke and fill colors are appended per section.
pub const PRESSED_STYLE: &str = "stroke-width:30;fill-opacity:0.2;stroke-opacity:0.4";

/// Base style of pad legends.
pub const LEGEND_STYLE: &str = "text-anchor:middle;font-family:'DejaVu Sans';fill:black";

/// Style of the ease-of-use badge in the pad corner.
pub const QUALITY_STYLE: &str =
    "font-family:'DejaVu Sans';font-size:400px;dominant-baseline:middle;text-anchor:middle";

/// Style of section headers; the font size is appended at draw time.
pub const HEADER_STYLE: &str =
    "text-anchor:left;font-family:'DejaVu Sans';dominant-baseline:bottom;fill:black";

/// Base style of per-pad annotation headers.
pub const PAD_HEADER_STYLE: &str =
    "font-family:'DejaVu Sans';font-size:400px;font-weight:bold;dominant-baseline:bottom";
