//! # Glyph Device Abstraction
//!
//! This module defines the `GlyphDevice` trait: the slice of a fixed-function
//! style rendering device that bitmap text needs. The text renderer never
//! reaches for global renderer state; every texture bind, color change,
//! transform and command list goes through a device passed in by the caller.
//!
//! ## Architecture
//!
//! - **Command lists**: Contiguous blocks of replayable lists, addressed as
//!   `base + offset`. Recording is scoped by `begin_list`/`end_list`.
//! - **Batches**: Vertices between `begin_batch` and `submit_batch` are
//!   tesselated by the device. How it batches is its own business.
//! - **Transform stack**: `push_matrix`/`pop_matrix` bracket `translate` calls.
//! - **Legacy path**: When the device is already inside a batched draw it
//!   reports `is_batch_active`, and text must go through `draw_text_immediate`.

use bitflags::bitflags;

use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::render::text::FontDescriptor;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, DeviceError>;

/// Errors reported by a glyph device
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The device could not reserve a contiguous block of command lists
    #[error("Failed to allocate {requested} command lists ({available} available)")]
    ListAllocation {
        /// Number of lists asked for
        requested: usize,
        /// Number of lists the device had left
        available: usize,
    },
}

bitflags! {
    /// Hints that change how the device emits vertices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VertexHints: u8 {
        /// Emit flattened (non-interpolated) vertices. Only used while
        /// compiling glyph lists.
        const FLAT = 1 << 0;
    }
}

/// Handle to one command list on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListHandle(pub u32);

impl ListHandle {
    /// Handle of the list `offset` slots after this one
    #[must_use]
    pub const fn offset(self, offset: u32) -> Self {
        Self(self.0 + offset)
    }
}

/// # Glyph Device Trait
///
/// Implemented by whatever owns the GPU state. All calls happen on the
/// rendering thread, and the caller holds the device exclusively for the
/// duration of a text call.
pub trait GlyphDevice {
    /// Reserve `count` contiguous command lists and return the first handle
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ListAllocation`] if the device cannot provide
    /// that many contiguous lists.
    fn gen_lists(&mut self, count: usize) -> BackendResult<ListHandle>;

    /// Start recording into `list`. Subsequent calls are captured, not executed.
    fn begin_list(&mut self, list: ListHandle);

    /// Stop recording the open list
    fn end_list(&mut self);

    /// Replay a previously recorded list
    fn call_list(&mut self, list: ListHandle);

    /// Replace the active vertex hints
    fn set_vertex_hints(&mut self, hints: VertexHints);

    /// Open a vertex batch
    fn begin_batch(&mut self);

    /// Add one textured vertex to the open batch
    fn vertex_uv(&mut self, position: Vec3, uv: Vec2);

    /// Tesselate and submit the open batch
    fn submit_batch(&mut self);

    /// Bind a texture by name
    fn bind_texture(&mut self, name: &str);

    /// Set the active draw color (each channel in `0.0..=1.0`)
    fn set_color(&mut self, color: Vec4);

    /// Translate the current transform in the XY plane
    fn translate(&mut self, offset: Vec2);

    /// Push a copy of the current transform
    fn push_matrix(&mut self);

    /// Restore the transform saved by the matching `push_matrix`
    fn pop_matrix(&mut self);

    /// Whether a higher-level batched draw is already in progress
    fn is_batch_active(&self) -> bool;

    /// Draw text through the device's own non-batched path
    fn draw_text_immediate(
        &mut self,
        font: &FontDescriptor,
        text: &[u8],
        x: f32,
        y: f32,
        color: u32,
        is_shadow: bool,
    );
}
