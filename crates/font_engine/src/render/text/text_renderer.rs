//! Line renderer
//!
//! Replays glyph lists for the events produced by [`EscapeScanner`], switching
//! colors as codes come by and moving to a fresh translation for every line.

use super::escape::{EscapeScanner, TextEvent};
use super::font::FontDescriptor;
use super::{FontError, FontResult};
use crate::backend::GlyphDevice;
use crate::foundation::math::{unpack_alpha, unpack_rgb, Vec2, Vec4, WHITE};

/// Literal glyphs drawn per line before the rest of the line is dropped
pub const MAX_LINE_GLYPHS: usize = 512;

/// Base color of one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColor {
    /// Color `\x15r` returns to
    pub base: Vec4,
}

impl TextColor {
    /// Decode a packed `0xAARRGGBB` color for a normal or shadow pass
    ///
    /// The shadow pass quarters each color byte. A zero alpha byte means opaque.
    #[must_use]
    pub fn from_packed(color: u32, is_shadow: bool) -> Self {
        let color = if is_shadow {
            ((color & 0x00fc_fcfc) >> 2) | (color & 0xff00_0000)
        } else {
            color
        };

        let (r, g, b) = unpack_rgb(color);
        let mut a = unpack_alpha(color);
        if a == 0.0 {
            a = 1.0;
        }
        Self { base: Vec4::new(r, g, b, a) }
    }

    /// Alpha every color of the call uses
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.base.w
    }
}

/// Draw `text` on `device` with the first line's top-left at (`x`, `y`)
///
/// If the device is already inside a batched draw, the whole call is handed
/// to its immediate text path instead. The draw color is left opaque white.
///
/// # Errors
///
/// Returns [`FontError::GlyphListsNotCompiled`] if `font` has no glyph lists.
/// Nothing is sent to the device in that case.
pub fn render_text<D: GlyphDevice + ?Sized>(
    font: &FontDescriptor,
    device: &mut D,
    text: &[u8],
    x: f32,
    y: f32,
    color: u32,
    is_shadow: bool,
) -> FontResult<()> {
    if device.is_batch_active() {
        log::trace!("Batch active, deferring {} bytes to immediate text", text.len());
        device.draw_text_immediate(font, text, x, y, color, is_shadow);
        return Ok(());
    }

    if text.is_empty() {
        return Ok(());
    }

    let lists = font
        .glyph_lists()
        .ok_or_else(|| FontError::GlyphListsNotCompiled(font.texture_name().to_string()))?;

    let color = TextColor::from_packed(color, is_shadow);
    let line_height = font.line_height() as f32;

    device.bind_texture(font.texture_name());
    device.set_color(color.base);

    device.push_matrix();
    device.translate(Vec2::new(x, y));

    let mut line = 0u32;
    let mut line_glyphs = 0usize;
    for event in EscapeScanner::new(text) {
        match event {
            TextEvent::Literal(glyph) => {
                if line_glyphs < MAX_LINE_GLYPHS {
                    device.call_list(lists.glyph(glyph));
                }
                line_glyphs += 1;
            }
            TextEvent::Escaped(glyph) => device.call_list(lists.glyph(glyph)),
            TextEvent::SetColor(index) => {
                device.set_color(font.colors().color(index, is_shadow, color.alpha()));
            }
            TextEvent::ResetColor => device.set_color(color.base),
            TextEvent::LineBreak => {
                if line_glyphs > MAX_LINE_GLYPHS {
                    log::trace!("Dropped {} glyphs past the line cap", line_glyphs - MAX_LINE_GLYPHS);
                }
                line += 1;
                line_glyphs = 0;
                device.pop_matrix();
                device.push_matrix();
                device.translate(Vec2::new(x, line as f32 * line_height + y));
            }
        }
    }

    device.pop_matrix();
    device.set_color(WHITE);
    Ok(())
}
