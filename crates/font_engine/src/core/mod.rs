//! # Core Module
//!
//! Shared configuration types used by the font and text rendering subsystems.
//!
//! ## Organization
//!
//! - **Config**: Font, atlas and palette settings

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    FontConfig,
    GlyphAtlasLayout,
    ColorPalette,
    Config,
    ConfigError,
};
