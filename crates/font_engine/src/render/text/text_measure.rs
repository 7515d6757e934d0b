//! Width measurement

use super::escape::{EscapeScanner, TextEvent};
use super::font::FontDescriptor;

/// Width in pixels of the widest line of `text`
///
/// Counts exactly the glyphs [`super::render_text`] would draw, ignoring the
/// per-line draw cap. Color codes take no space.
#[must_use]
pub fn measure_text(font: &FontDescriptor, text: &[u8]) -> u32 {
    let mut widest = 0;
    let mut width = 0;

    for event in EscapeScanner::new(text) {
        match event {
            TextEvent::Literal(glyph) | TextEvent::Escaped(glyph) => width += font.advance_width(glyph),
            TextEvent::LineBreak => {
                widest = widest.max(width);
                width = 0;
            }
            TextEvent::SetColor(_) | TextEvent::ResetColor => {}
        }
    }

    widest.max(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FontConfig;
    use crate::render::text::{ESCAPE_MARKER, GLYPH_COUNT};

    fn font() -> FontDescriptor {
        let mut widths = [6; GLYPH_COUNT];
        widths[usize::from(b'i')] = 2;
        widths[usize::from(b'q')] = 5;
        widths[usize::from(ESCAPE_MARKER)] = 4;
        FontDescriptor::new(FontConfig::default(), widths).unwrap()
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(measure_text(&font(), b""), 0);
    }

    #[test]
    fn test_single_glyph_is_its_advance() {
        let font = font();
        for glyph in 0..=u8::MAX {
            if glyph == b'\n' {
                continue;
            }
            assert_eq!(measure_text(&font, &[glyph]), font.advance_width(glyph), "glyph {glyph:#04x}");
        }
    }

    #[test]
    fn test_widest_line_wins() {
        let font = font();
        assert_eq!(measure_text(&font, b"i\nii"), 4);
        assert_eq!(measure_text(&font, b"aaa\ni"), 18);
        assert_eq!(measure_text(&font, b"a\n"), 6);
    }

    #[test]
    fn test_color_codes_are_free() {
        let font = font();
        assert_eq!(measure_text(&font, b"\x154a\x15rb\x15f"), 12);
    }

    #[test]
    fn test_escapes_count_what_is_drawn() {
        let font = font();
        assert_eq!(measure_text(&font, b"\x15\x15"), 4);
        assert_eq!(measure_text(&font, b"\x15q"), 9);
        assert_eq!(measure_text(&font, b"a\x15"), 10);
        assert_eq!(measure_text(&font, b"a\x15\na"), 12);
    }

    #[test]
    fn test_no_line_cap_in_measurement() {
        let text = vec![b'a'; 600];
        assert_eq!(measure_text(&font(), &text), 3600);
    }
}
