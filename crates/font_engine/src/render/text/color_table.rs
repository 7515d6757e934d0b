//! Inline color palette
//!
//! Color codes `0`-`9` and `a`-`f` (lowercase only) index one of two fixed
//! 16-entry tables of packed `0xRRGGBB` values.

use crate::core::config::ColorPalette;
use crate::foundation::math::{unpack_rgb, Vec4};

/// Soft dye-based colors
pub const DYE_COLORS: [u32; 16] = [
    0x27_2727, 0x2d_44aa, 0x09_4816, 0x30_c2ca,
    0xdb_161a, 0x97_30c3, 0x58_3337, 0xad_aba8,
    0x52_5557, 0x8b_d7ff, 0x7b_d53a, 0xf6_8008,
    0xf9_aecd, 0xd3_44b1, 0xf9_f618, 0xff_ffff,
];

/// The old high-contrast colors
pub const CLASSIC_COLORS: [u32; 16] = [
    0x00_0000, 0x00_00aa, 0x00_aa00, 0x00_aaaa,
    0xaa_0000, 0xaa_00aa, 0xff_aa00, 0xaa_aaaa,
    0x55_5555, 0x55_55ff, 0x55_ff55, 0x55_ffff,
    0xff_5555, 0xff_55ff, 0xff_ff55, 0xff_ffff,
];

/// Per-channel factor applied to palette colors on the shadow pass
const SHADOW_FACTOR: f32 = 0.25;

/// Value of a color code digit, if `byte` is one
#[must_use]
pub const fn hex_digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// One of the two static palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    colors: &'static [u32; 16],
}

impl ColorTable {
    /// Table for a configured palette
    #[must_use]
    pub const fn for_palette(palette: ColorPalette) -> Self {
        match palette {
            ColorPalette::Dye => Self { colors: &DYE_COLORS },
            ColorPalette::Classic => Self { colors: &CLASSIC_COLORS },
        }
    }

    /// Packed `0xRRGGBB` value at `index` (masked to 0..16)
    #[must_use]
    pub const fn rgb(&self, index: u8) -> u32 {
        self.colors[(index & 0x0f) as usize]
    }

    /// Draw color for `index`, darkened for the shadow pass, with the given alpha
    #[must_use]
    pub fn color(&self, index: u8, is_shadow: bool, alpha: f32) -> Vec4 {
        let (mut r, mut g, mut b) = unpack_rgb(self.rgb(index));
        if is_shadow {
            r *= SHADOW_FACTOR;
            g *= SHADOW_FACTOR;
            b *= SHADOW_FACTOR;
        }
        Vec4::new(r, g, b, alpha)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::for_palette(ColorPalette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_digits() {
        assert_eq!(hex_digit_value(b'0'), Some(0));
        assert_eq!(hex_digit_value(b'9'), Some(9));
        assert_eq!(hex_digit_value(b'a'), Some(10));
        assert_eq!(hex_digit_value(b'f'), Some(15));
    }

    #[test]
    fn test_non_digits_are_rejected() {
        for byte in [b'A', b'F', b'g', b'r', b'/', b':', b' ', 0x15, 0xff] {
            assert_eq!(hex_digit_value(byte), None, "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_palette_selection() {
        assert_eq!(ColorTable::for_palette(ColorPalette::Dye).rgb(4), 0xdb_161a);
        assert_eq!(ColorTable::for_palette(ColorPalette::Classic).rgb(4), 0xaa_0000);
        assert_eq!(ColorTable::default().rgb(15), 0xff_ffff);
    }

    #[test]
    fn test_shadow_color_is_quarter_brightness() {
        let table = ColorTable::for_palette(ColorPalette::Classic);
        let normal = table.color(0xf, false, 0.5);
        let shadow = table.color(0xf, true, 0.5);

        assert_relative_eq!(normal, Vec4::new(1.0, 1.0, 1.0, 0.5));
        assert_relative_eq!(shadow, Vec4::new(0.25, 0.25, 0.25, 0.5));
    }
}
