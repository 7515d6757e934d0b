//! Rendering subsystems
//!
//! - [`text`]: bitmap font text with inline color codes

pub mod text;
