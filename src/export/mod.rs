//! SVG rendering for cheat sheets.
//!
//! This module contains the drawing back-end, the page geometry and output
//! sequencing rules, the streaming layout/pagination engine together with
//! its producer-side stream handle, and the LED signal reference sheet.

pub mod canvas;
pub mod engine;
pub mod led_map;
pub mod page;
pub mod stream;

pub use canvas::SvgCanvas;
pub use engine::SheetOptions;
pub use led_map::render_led_sheet;
pub use page::{next_filename, PageGeometry, SheetTarget};
pub use stream::SheetWriter;
