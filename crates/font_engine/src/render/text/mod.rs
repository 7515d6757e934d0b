//! Text rendering system
//!
//! Bitmap font text with an inline formatting mini-language. A `\x15` byte
//! followed by a code byte changes how the rest of the string is drawn:
//!
//! | Sequence        | Effect                                      |
//! |-----------------|---------------------------------------------|
//! | `\x15` `0`-`f`  | Switch to one of 16 palette colors          |
//! | `\x15` `r`      | Back to the color the call started with     |
//! | `\x15` `\x15`   | Draw the `\x15` glyph itself                |
//! | `\x15` `\n`     | Nothing; the newline is swallowed           |
//! | `\x15` other    | Draw both bytes as glyphs                   |
//!
//! # Architecture
//!
//! - [`EscapeScanner`]: Turns text into [`TextEvent`]s, shared by render and measure
//! - [`ColorTable`]: The 16 inline palette colors
//! - [`GlyphLists`]: One precompiled device list per glyph
//! - [`FontDescriptor`]: Advance widths, line height, texture and compiled lists
//! - `text_renderer` / `text_measure`: The two consumers of the scanner
//!
//! # Example
//!
//! ```no_run
//! use font_engine::prelude::*;
//!
//! let mut device = RecordingDevice::new();
//! let font = FontDescriptor::init(FontConfig::default(), [6; 256], &mut device)?;
//! let width = font.measure(b"\x154red\x15r plain");
//! font.render_with_shadow(&mut device, b"\x154red\x15r plain", 10.0, 10.0, 0xffff_ffff)?;
//! # Ok::<(), FontError>(())
//! ```

mod color_table;
mod escape;
mod font;
mod glyph_lists;
mod text_measure;
mod text_renderer;

#[cfg(test)]
mod tests;

pub use color_table::{ColorTable, CLASSIC_COLORS, DYE_COLORS, hex_digit_value};
pub use escape::{EscapeScanner, TextEvent, ESCAPE_MARKER};
pub use font::{FontDescriptor, GLYPH_COUNT};
pub use glyph_lists::{GlyphLists, build_glyph};
pub use text_measure::measure_text;
pub use text_renderer::{render_text, TextColor, MAX_LINE_GLYPHS};

use crate::backend::DeviceError;
use crate::config::ConfigError;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The device rejected a request (fatal during glyph list compilation)
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    /// Text was rendered before the font's glyph lists were compiled
    #[error("Glyph lists have not been compiled for font '{0}'")]
    GlyphListsNotCompiled(String),

    /// Glyph lists were compiled a second time
    #[error("Glyph lists are already compiled for font '{0}'")]
    AlreadyCompiled(String),

    /// The font configuration could not be loaded or is invalid
    #[error("Font configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The font configuration failed validation
    #[error("Invalid font configuration: {0}")]
    InvalidConfig(String),
}
