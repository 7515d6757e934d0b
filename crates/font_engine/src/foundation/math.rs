//! Math utilities and types
//!
//! Vector aliases shared by the device interface and the text renderer.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type (translations, texture coordinates)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (vertex positions)
pub type Vec3 = Vector3<f32>;

/// 4D vector type (RGBA colors)
pub type Vec4 = Vector4<f32>;

/// Opaque white, the color every render call leaves behind
pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Unpack the red, green and blue bytes of a packed `0xAARRGGBB` value into `0.0..=1.0` floats.
#[must_use]
pub fn unpack_rgb(packed: u32) -> (f32, f32, f32) {
    let channel = |shift: u32| f32::from(((packed >> shift) & 0xff) as u8) / 255.0;
    (channel(16), channel(8), channel(0))
}

/// Unpack the alpha byte of a packed `0xAARRGGBB` value into a `0.0..=1.0` float.
#[must_use]
pub fn unpack_alpha(packed: u32) -> f32 {
    f32::from((packed >> 24) as u8) / 255.0
}
