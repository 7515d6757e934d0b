//! # Font Configuration
//!
//! Serializable settings for a bitmap font: which texture it samples, how the
//! glyphs are laid out in that texture, how far apart lines are, and which
//! color palette the inline `\x15` color codes select from.
//!
//! ## Design Goals
//!
//! - **Serializable**: Stored as TOML or RON through [`Config`]
//! - **Defaults**: A default config describes the stock 128px, 16x16 glyph sheet

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Which 16-entry color table inline color codes index into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPalette {
    /// Soft dye-based colors
    #[default]
    Dye,
    /// The old high-contrast colors
    Classic,
}

/// # Glyph Atlas Layout
///
/// Describes the grid of glyph cells inside the font texture. Glyph `c`
/// lives in column `c % columns`, row `c / columns`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphAtlasLayout {
    /// Glyph cells per atlas row
    pub columns: u32,
    /// Edge length of one glyph cell in pixels
    pub cell_size: f32,
    /// Edge length of the (square) atlas texture in pixels
    pub texture_size: f32,
}

impl GlyphAtlasLayout {
    /// Validate the layout
    pub fn validate(&self) -> Result<(), String> {
        if self.columns == 0 {
            return Err("Atlas must have at least one column".to_string());
        }
        if self.cell_size <= 0.0 || self.texture_size <= 0.0 {
            return Err("Atlas cell and texture sizes must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for GlyphAtlasLayout {
    fn default() -> Self {
        Self {
            columns: 16,
            cell_size: 8.0,
            texture_size: 128.0,
        }
    }
}

/// # Font Configuration
///
/// Everything about a font that is not derived from its glyph bitmap.
/// Advance widths are measured by the asset loader and passed separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Name of the glyph texture to bind before drawing
    pub texture_name: String,
    /// Vertical advance between lines in pixels
    pub line_height: u32,
    /// Palette used by inline color codes
    pub palette: ColorPalette,
    /// Glyph cell layout inside the texture
    pub atlas: GlyphAtlasLayout,
}

impl FontConfig {
    /// Create a font configuration for the given texture
    pub fn new(texture_name: impl Into<String>) -> Self {
        Self {
            texture_name: texture_name.into(),
            ..Self::default()
        }
    }

    /// Set line height
    #[must_use]
    pub fn with_line_height(mut self, line_height: u32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set color palette
    #[must_use]
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set atlas layout
    #[must_use]
    pub fn with_atlas(mut self, atlas: GlyphAtlasLayout) -> Self {
        self.atlas = atlas;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.texture_name.is_empty() {
            return Err("Font texture name cannot be empty".to_string());
        }
        self.atlas.validate()
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            texture_name: "/font/default.png".to_string(),
            line_height: 10,
            palette: ColorPalette::Dye,
            atlas: GlyphAtlasLayout::default(),
        }
    }
}

impl Config for FontConfig {}
