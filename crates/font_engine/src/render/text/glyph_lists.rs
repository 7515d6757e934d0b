//! Precompiled glyph lists
//!
//! Each glyph becomes one device list: its textured quad followed by a
//! translation by its advance width. Replaying glyph lists back to back lays
//! out a line of text with no per-glyph work on the CPU.

use super::font::{FontDescriptor, GLYPH_COUNT};
use super::FontResult;
use crate::backend::{GlyphDevice, ListHandle, VertexHints};
use crate::core::config::GlyphAtlasLayout;
use crate::foundation::math::{Vec2, Vec3};

/// Gap left at the far edges of a glyph cell so neighbouring cells never bleed in
const CELL_INSET: f32 = 0.01;

/// Contiguous block of per-glyph lists, addressed by byte value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLists {
    base: ListHandle,
    len: usize,
}

impl GlyphLists {
    /// Allocate and record one list per glyph of `font`
    ///
    /// The flat-vertex hint is held for the whole compilation and cleared
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`super::FontError::Device`] if the lists cannot be allocated.
    pub fn compile<D: GlyphDevice + ?Sized>(font: &FontDescriptor, device: &mut D) -> FontResult<Self> {
        let widths = font.advance_widths();
        log::debug!("Compiling {} glyph lists for '{}'", widths.len(), font.texture_name());

        let base = device.gen_lists(widths.len()).map_err(|e| {
            log::warn!("Glyph list allocation failed for '{}': {}", font.texture_name(), e);
            e
        })?;

        device.set_vertex_hints(VertexHints::FLAT);
        for (glyph, &advance) in (0..=u8::MAX).zip(widths.iter()) {
            device.begin_list(base.offset(u32::from(glyph)));
            device.begin_batch();
            build_glyph(device, font.atlas(), glyph, 0.0, 0.0);
            device.submit_batch();
            device.translate(Vec2::new(advance as f32, 0.0));
            device.end_list();
        }
        device.set_vertex_hints(VertexHints::empty());

        log::info!("Compiled {} glyph lists for '{}' at list {}", widths.len(), font.texture_name(), base.0);
        Ok(Self { base, len: widths.len() })
    }

    /// List that draws `glyph` and advances past it
    #[must_use]
    pub const fn glyph(&self, glyph: u8) -> ListHandle {
        self.base.offset(glyph as u32)
    }

    /// First list of the block
    #[must_use]
    pub const fn base(&self) -> ListHandle {
        self.base
    }

    /// Number of lists (always one per glyph)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the block is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Emit the textured quad for `glyph` with its top-left corner at (`x`, `y`)
///
/// Vertices go out bottom-left, bottom-right, top-right, top-left into the
/// device's open batch.
pub fn build_glyph<D: GlyphDevice + ?Sized>(device: &mut D, atlas: &GlyphAtlasLayout, glyph: u8, x: f32, y: f32) {
    let glyph = u32::from(glyph);
    let u = (glyph % atlas.columns) as f32 * atlas.cell_size;
    let v = (glyph / atlas.columns) as f32 * atlas.cell_size;
    let extent = atlas.cell_size - CELL_INSET;
    let scale = atlas.texture_size;

    device.vertex_uv(Vec3::new(x, y + extent, 0.0), Vec2::new(u / scale, (v + extent) / scale));
    device.vertex_uv(Vec3::new(x + extent, y + extent, 0.0), Vec2::new((u + extent) / scale, (v + extent) / scale));
    device.vertex_uv(Vec3::new(x + extent, y, 0.0), Vec2::new((u + extent) / scale, v / scale));
    device.vertex_uv(Vec3::new(x, y, 0.0), Vec2::new(u / scale, v / scale));
}
