//! Cross-module tests for the text pipeline
//!
//! Rendering and measurement checked together against a recording device.

mod render_properties;

use crate::backend::RecordingDevice;
use crate::core::config::FontConfig;
use crate::foundation::logging;
use crate::render::text::{FontDescriptor, ESCAPE_MARKER, GLYPH_COUNT};

/// Font with distinct advances so width mistakes show up in sums
pub(super) fn varied_font() -> (FontDescriptor, RecordingDevice) {
    logging::init_for_tests();

    let mut widths = [0u32; GLYPH_COUNT];
    for (glyph, width) in widths.iter_mut().enumerate() {
        *width = 1 + (glyph % 7) as u32;
    }
    widths[usize::from(ESCAPE_MARKER)] = 9;

    let mut device = RecordingDevice::new();
    let font = FontDescriptor::init(FontConfig::default(), widths, &mut device).unwrap();
    device.clear_commands();
    (font, device)
}

/// Glyph bytes drawn by the recorded top-level stream, split into lines at each
/// pop/push transform pair
pub(super) fn drawn_lines(font: &FontDescriptor, device: &RecordingDevice) -> Vec<Vec<u8>> {
    use crate::backend::DeviceCommand;

    let base = font.glyph_lists().unwrap().base().0;
    let mut lines = Vec::new();
    let mut current = Vec::new();
    for command in device.commands() {
        match command {
            DeviceCommand::CallList(list) => current.push(u8::try_from(list.0 - base).unwrap()),
            DeviceCommand::PopMatrix => lines.push(std::mem::take(&mut current)),
            _ => {}
        }
    }
    lines
}
