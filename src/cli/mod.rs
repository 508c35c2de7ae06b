//! CLI command handlers for Chordsheet.
//!
//! This module provides headless, scriptable access to the renderer for
//! automation, testing, and CI/CD integration.

pub mod common;
pub mod inspect;
pub mod leds;
pub mod render;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult};
pub use inspect::InspectArgs;
pub use leds::LedsArgs;
pub use render::RenderArgs;
