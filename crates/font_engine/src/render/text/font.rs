//! Font descriptor
//!
//! Everything the renderer and measurer need to know about one bitmap font.

use super::color_table::ColorTable;
use super::glyph_lists::GlyphLists;
use super::text_measure::measure_text;
use super::text_renderer::render_text;
use super::{FontError, FontResult};
use crate::backend::GlyphDevice;
use crate::core::config::{Config, FontConfig, GlyphAtlasLayout};
use std::path::Path;

/// Number of glyph slots in a font, one per byte value
pub const GLYPH_COUNT: usize = 256;

/// A bitmap font: advance widths, line height, texture and compiled glyph lists
///
/// Advance widths come from whoever loaded the glyph bitmap. Glyph lists are
/// compiled once with [`FontDescriptor::compile_glyph_lists`] (or
/// [`FontDescriptor::init`]) and are read-only afterwards.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    texture_name: String,
    advance_widths: [u32; GLYPH_COUNT],
    line_height: u32,
    atlas: GlyphAtlasLayout,
    colors: ColorTable,
    glyph_lists: Option<GlyphLists>,
}

impl FontDescriptor {
    /// Create an uncompiled font from its config and advance widths
    ///
    /// # Errors
    ///
    /// Returns [`FontError::InvalidConfig`] if the config fails validation.
    pub fn new(config: FontConfig, advance_widths: [u32; GLYPH_COUNT]) -> FontResult<Self> {
        config.validate().map_err(FontError::InvalidConfig)?;

        Ok(Self {
            texture_name: config.texture_name,
            advance_widths,
            line_height: config.line_height,
            atlas: config.atlas,
            colors: ColorTable::for_palette(config.palette),
            glyph_lists: None,
        })
    }

    /// Create an uncompiled font from a TOML or RON config file
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Config`] if the file cannot be read or parsed.
    pub fn from_config_file(path: impl AsRef<Path>, advance_widths: [u32; GLYPH_COUNT]) -> FontResult<Self> {
        Self::new(FontConfig::load_from_file(path)?, advance_widths)
    }

    /// Create a font and compile its glyph lists on `device`
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid or the device cannot allocate the
    /// glyph lists. Either way the font is unusable.
    pub fn init<D: GlyphDevice + ?Sized>(
        config: FontConfig,
        advance_widths: [u32; GLYPH_COUNT],
        device: &mut D,
    ) -> FontResult<Self> {
        let mut font = Self::new(config, advance_widths)?;
        font.compile_glyph_lists(device)?;
        Ok(font)
    }

    /// Compile one device list per glyph
    ///
    /// # Errors
    ///
    /// Returns [`FontError::AlreadyCompiled`] on a second call and
    /// [`FontError::Device`] if the lists cannot be allocated.
    pub fn compile_glyph_lists<D: GlyphDevice + ?Sized>(&mut self, device: &mut D) -> FontResult<()> {
        if self.glyph_lists.is_some() {
            return Err(FontError::AlreadyCompiled(self.texture_name.clone()));
        }
        self.glyph_lists = Some(GlyphLists::compile(self, device)?);
        Ok(())
    }

    /// Widest line of `text` in pixels
    #[must_use]
    pub fn measure(&self, text: &[u8]) -> u32 {
        measure_text(self, text)
    }

    /// Draw `text` with its first line starting at (`x`, `y`)
    ///
    /// `color` is packed `0xAARRGGBB`; an alpha of zero means opaque.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::GlyphListsNotCompiled`] if called before compilation.
    pub fn render<D: GlyphDevice + ?Sized>(
        &self,
        device: &mut D,
        text: &[u8],
        x: f32,
        y: f32,
        color: u32,
        is_shadow: bool,
    ) -> FontResult<()> {
        render_text(self, device, text, x, y, color, is_shadow)
    }

    /// Draw a darkened copy one pixel down and right, then `text` on top
    ///
    /// # Errors
    ///
    /// Returns [`FontError::GlyphListsNotCompiled`] if called before compilation.
    pub fn render_with_shadow<D: GlyphDevice + ?Sized>(
        &self,
        device: &mut D,
        text: &[u8],
        x: f32,
        y: f32,
        color: u32,
    ) -> FontResult<()> {
        render_text(self, device, text, x + 1.0, y + 1.0, color, true)?;
        render_text(self, device, text, x, y, color, false)
    }

    /// Name of the glyph texture
    pub fn texture_name(&self) -> &str {
        &self.texture_name
    }

    /// Advance width of one glyph
    #[must_use]
    pub const fn advance_width(&self, glyph: u8) -> u32 {
        self.advance_widths[glyph as usize]
    }

    /// All advance widths, indexed by byte value
    #[must_use]
    pub const fn advance_widths(&self) -> &[u32; GLYPH_COUNT] {
        &self.advance_widths
    }

    /// Vertical distance between lines
    #[must_use]
    pub const fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Glyph cell layout in the texture
    #[must_use]
    pub const fn atlas(&self) -> &GlyphAtlasLayout {
        &self.atlas
    }

    /// Palette for inline color codes
    #[must_use]
    pub const fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Compiled glyph lists, if any
    #[must_use]
    pub const fn glyph_lists(&self) -> Option<&GlyphLists> {
        self.glyph_lists.as_ref()
    }
}
