//! # Font Engine
//!
//! Bitmap font text rendering for a real-time renderer.
//!
//! ## Features
//!
//! - **Inline Formatting**: `\x15` + code selects one of 16 colors, resets, or escapes itself
//! - **Precompiled Glyphs**: One command list per glyph, built once at font initialization
//! - **Consistent Measurement**: Widths come from the same scanner the renderer uses
//! - **Injected Device**: All GPU state goes through a [`backend::GlyphDevice`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use font_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut device = RecordingDevice::new();
//!     let font = FontDescriptor::init(FontConfig::default(), [6; 256], &mut device)?;
//!
//!     let width = font.measure(b"\x15cHello\x15r world");
//!     font.render(&mut device, b"\x15cHello\x15r world", 2.0, 2.0, 0xffff_ffff, false)?;
//!     println!("drew {width}px of text");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod backend;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        backend::{GlyphDevice, ListHandle, RecordingDevice, VertexHints, DeviceError},
        core::config::{ColorPalette, FontConfig, GlyphAtlasLayout},
        foundation::math::{Vec2, Vec3, Vec4},
        render::text::{FontDescriptor, FontError, FontResult, ESCAPE_MARKER},
    };
}
