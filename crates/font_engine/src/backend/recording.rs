//! Recording glyph device
//!
//! A headless [`GlyphDevice`] that keeps every call it receives. Calls made
//! while a list is open go into that list; everything else goes into the
//! top-level command stream. Useful for offscreen tooling and as the test
//! double for the text renderer.

use super::render::{BackendResult, DeviceError, GlyphDevice, ListHandle, VertexHints};
use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::render::text::FontDescriptor;

/// First handle handed out by `gen_lists`. Zero is never a valid list.
const FIRST_LIST: u32 = 1;

/// One captured device call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// `call_list`
    CallList(ListHandle),
    /// `set_vertex_hints`
    SetVertexHints(VertexHints),
    /// `begin_batch`
    BeginBatch,
    /// `vertex_uv`, tagged with whether flat vertices were requested at the time
    Vertex {
        /// Vertex position
        position: Vec3,
        /// Texture coordinate
        uv: Vec2,
        /// `VertexHints::FLAT` was active
        flat: bool,
    },
    /// `submit_batch`
    SubmitBatch,
    /// `bind_texture`
    BindTexture(String),
    /// `set_color`
    SetColor(Vec4),
    /// `translate`
    Translate(Vec2),
    /// `push_matrix`
    PushMatrix,
    /// `pop_matrix`
    PopMatrix,
}

/// A call routed to the legacy immediate text path
#[derive(Debug, Clone, PartialEq)]
pub struct ImmediateTextCall {
    /// Text bytes
    pub text: Vec<u8>,
    /// Start X
    pub x: f32,
    /// Start Y
    pub y: f32,
    /// Packed `0xAARRGGBB` color
    pub color: u32,
    /// Shadow pass
    pub is_shadow: bool,
}

/// Headless device that records instead of drawing
#[derive(Debug, Default)]
pub struct RecordingDevice {
    commands: Vec<DeviceCommand>,
    lists: Vec<Vec<DeviceCommand>>,
    recording: Option<ListHandle>,
    hints: VertexHints,
    list_capacity: Option<usize>,
    batch_active: bool,
    immediate_calls: Vec<ImmediateTextCall>,
    matrix_depth: usize,
}

impl RecordingDevice {
    /// Create a device with unlimited list storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device that can hand out at most `capacity` lists in total
    pub fn with_list_capacity(capacity: usize) -> Self {
        Self {
            list_capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Raise or lower the batch-active flag
    pub fn set_batch_active(&mut self, active: bool) {
        self.batch_active = active;
    }

    /// Top-level command stream
    pub fn commands(&self) -> &[DeviceCommand] {
        &self.commands
    }

    /// Forget the top-level command stream, keeping compiled lists
    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.immediate_calls.clear();
    }

    /// Commands recorded into `list`, if it was allocated
    pub fn list(&self, list: ListHandle) -> Option<&[DeviceCommand]> {
        let index = list.0.checked_sub(FIRST_LIST)? as usize;
        self.lists.get(index).map(Vec::as_slice)
    }

    /// Number of lists allocated so far
    pub fn allocated_lists(&self) -> usize {
        self.lists.len()
    }

    /// Vertex hints currently active
    pub const fn hints(&self) -> VertexHints {
        self.hints
    }

    /// Current push/pop nesting depth
    pub const fn matrix_depth(&self) -> usize {
        self.matrix_depth
    }

    /// Calls routed to the legacy text path
    pub fn immediate_calls(&self) -> &[ImmediateTextCall] {
        &self.immediate_calls
    }

    /// Lists replayed from the top-level stream, in order
    pub fn called_lists(&self) -> Vec<ListHandle> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DeviceCommand::CallList(list) => Some(*list),
                _ => None,
            })
            .collect()
    }

    /// Colors set from the top-level stream, in order
    pub fn colors(&self) -> Vec<Vec4> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DeviceCommand::SetColor(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DeviceCommand) {
        match self.recording {
            Some(list) => self.lists[(list.0 - FIRST_LIST) as usize].push(command),
            None => self.commands.push(command),
        }
    }
}

impl GlyphDevice for RecordingDevice {
    fn gen_lists(&mut self, count: usize) -> BackendResult<ListHandle> {
        let available = self
            .list_capacity
            .map_or(usize::MAX, |capacity| capacity.saturating_sub(self.lists.len()));
        let base = u32::try_from(self.lists.len())
            .ok()
            .and_then(|used| used.checked_add(FIRST_LIST));

        match base {
            Some(base) if count <= available => {
                self.lists.resize_with(self.lists.len() + count, Vec::new);
                Ok(ListHandle(base))
            }
            _ => Err(DeviceError::ListAllocation { requested: count, available }),
        }
    }

    fn begin_list(&mut self, list: ListHandle) {
        if self.recording.is_some() {
            log::warn!("begin_list({}) while another list is open", list.0);
        }
        if self.list(list).is_none() {
            log::warn!("begin_list({}) on an unallocated list, ignoring", list.0);
            return;
        }
        self.lists[(list.0 - FIRST_LIST) as usize].clear();
        self.recording = Some(list);
    }

    fn end_list(&mut self) {
        self.recording = None;
    }

    fn call_list(&mut self, list: ListHandle) {
        self.record(DeviceCommand::CallList(list));
    }

    fn set_vertex_hints(&mut self, hints: VertexHints) {
        self.hints = hints;
        self.record(DeviceCommand::SetVertexHints(hints));
    }

    fn begin_batch(&mut self) {
        self.record(DeviceCommand::BeginBatch);
    }

    fn vertex_uv(&mut self, position: Vec3, uv: Vec2) {
        let flat = self.hints.contains(VertexHints::FLAT);
        self.record(DeviceCommand::Vertex { position, uv, flat });
    }

    fn submit_batch(&mut self) {
        self.record(DeviceCommand::SubmitBatch);
    }

    fn bind_texture(&mut self, name: &str) {
        self.record(DeviceCommand::BindTexture(name.to_string()));
    }

    fn set_color(&mut self, color: Vec4) {
        self.record(DeviceCommand::SetColor(color));
    }

    fn translate(&mut self, offset: Vec2) {
        self.record(DeviceCommand::Translate(offset));
    }

    fn push_matrix(&mut self) {
        self.matrix_depth += 1;
        self.record(DeviceCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        if self.matrix_depth == 0 {
            log::warn!("pop_matrix with an empty transform stack");
        }
        self.matrix_depth = self.matrix_depth.saturating_sub(1);
        self.record(DeviceCommand::PopMatrix);
    }

    fn is_batch_active(&self) -> bool {
        self.batch_active
    }

    fn draw_text_immediate(
        &mut self,
        _font: &FontDescriptor,
        text: &[u8],
        x: f32,
        y: f32,
        color: u32,
        is_shadow: bool,
    ) {
        self.immediate_calls.push(ImmediateTextCall {
            text: text.to_vec(),
            x,
            y,
            color,
            is_shadow,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_lists_is_contiguous() {
        let mut device = RecordingDevice::new();
        let first = device.gen_lists(4).unwrap();
        let second = device.gen_lists(2).unwrap();

        assert_eq!(first, ListHandle(1));
        assert_eq!(second, first.offset(4));
        assert_eq!(device.allocated_lists(), 6);
    }

    #[test]
    fn test_gen_lists_respects_capacity() {
        let mut device = RecordingDevice::with_list_capacity(10);
        device.gen_lists(8).unwrap();

        let err = device.gen_lists(3).unwrap_err();
        assert_eq!(err, DeviceError::ListAllocation { requested: 3, available: 2 });
        assert_eq!(device.allocated_lists(), 8);
    }

    #[test]
    fn test_commands_inside_list_are_captured_separately() {
        let mut device = RecordingDevice::new();
        let list = device.gen_lists(1).unwrap();

        device.begin_list(list);
        device.translate(Vec2::new(4.0, 0.0));
        device.end_list();
        device.call_list(list);

        assert_eq!(device.list(list).unwrap(), &[DeviceCommand::Translate(Vec2::new(4.0, 0.0))]);
        assert_eq!(device.commands(), &[DeviceCommand::CallList(list)]);
    }

    #[test]
    fn test_vertices_are_tagged_with_flat_hint() {
        let mut device = RecordingDevice::new();
        device.set_vertex_hints(VertexHints::FLAT);
        device.vertex_uv(Vec3::zeros(), Vec2::zeros());
        device.set_vertex_hints(VertexHints::empty());
        device.vertex_uv(Vec3::zeros(), Vec2::zeros());

        let flags: Vec<bool> = device
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DeviceCommand::Vertex { flat, .. } => Some(*flat),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_matrix_depth_tracks_push_pop() {
        let mut device = RecordingDevice::new();
        device.push_matrix();
        device.push_matrix();
        device.pop_matrix();
        assert_eq!(device.matrix_depth(), 1);
    }
}
