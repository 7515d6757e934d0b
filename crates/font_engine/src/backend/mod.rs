//! # Backend Module
//!
//! The device abstraction the text renderer draws through, and a recording
//! implementation of it.
//!
//! ## Organization
//!
//! - **Render**: [`GlyphDevice`] trait and its handle/hint/error types
//! - **Recording**: [`RecordingDevice`], a headless device that captures commands

pub mod render;
pub mod recording;

// Re-export commonly used backend types
pub use render::{GlyphDevice, ListHandle, VertexHints, DeviceError, BackendResult};
pub use recording::{RecordingDevice, DeviceCommand, ImmediateTextCall};
