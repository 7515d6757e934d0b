//! Behavioural properties of the line renderer

use super::{drawn_lines, varied_font};
use crate::backend::DeviceCommand;
use crate::foundation::math::{Vec4, WHITE};
use crate::render::text::{ESCAPE_MARKER, MAX_LINE_GLYPHS};
use approx::assert_relative_eq;

#[test]
fn test_reset_restores_call_color() {
    let (font, mut device) = varied_font();
    font.render(&mut device, b"\x152a\x15rb", 0.0, 0.0, 0xc010_2030, false).unwrap();

    let colors = device.colors();
    assert_eq!(colors.len(), 4);
    assert_ne!(colors[1], colors[0]);
    assert_eq!(colors[2], colors[0]);
    assert_eq!(colors[3], WHITE);
}

#[test]
fn test_shadow_pass_is_deterministic() {
    let (font, mut device) = varied_font();
    let text = b"\x15ehello\x15r \x153world";

    font.render(&mut device, text, 0.0, 0.0, 0xff80_40c0, true).unwrap();
    let first = device.colors();
    device.clear_commands();
    font.render(&mut device, text, 0.0, 0.0, 0xff80_40c0, true).unwrap();

    assert_eq!(device.colors(), first);
}

#[test]
fn test_invalid_code_draws_both_bytes() {
    let (font, mut device) = varied_font();
    font.render(&mut device, b"\x15q", 0.0, 0.0, 0xffff_ffff, false).unwrap();
    assert_eq!(drawn_lines(&font, &device), vec![vec![ESCAPE_MARKER, b'q']]);
}

#[test]
fn test_batch_active_defers_everything() {
    let (font, mut device) = varied_font();
    device.set_batch_active(true);
    font.render(&mut device, b"\x154deferred\nline", 7.0, 8.0, 0x1234_5678, true).unwrap();

    assert!(device.commands().is_empty());
    let calls = device.immediate_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, b"\x154deferred\nline".to_vec());
    assert_eq!((calls[0].x, calls[0].y), (7.0, 8.0));
    assert_eq!(calls[0].color, 0x1234_5678);
    assert!(calls[0].is_shadow);
}

#[test]
fn test_line_cap_drops_only_literals() {
    let (font, mut device) = varied_font();
    let mut text = vec![b'a'; 600];
    text.extend_from_slice(b"\x15\x15\x154\nbc");
    font.render(&mut device, &text, 0.0, 0.0, 0xffff_ffff, false).unwrap();

    let lines = drawn_lines(&font, &device);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), MAX_LINE_GLYPHS + 1);
    assert_eq!(lines[0].last(), Some(&ESCAPE_MARKER));
    assert_eq!(lines[1], b"bc".to_vec());

    // The color code after the cap still took effect
    let colors = device.colors();
    assert_eq!(colors.len(), 3);
    assert_relative_eq!(colors[1], font.colors().color(4, false, 1.0));
}

#[test]
fn test_shadow_helper_draws_offset_shadow_first() {
    let (font, mut device) = varied_font();
    font.render_with_shadow(&mut device, b"x", 10.0, 10.0, 0xffff_ffff).unwrap();

    let translations: Vec<_> = device
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DeviceCommand::Translate(offset) => Some((offset.x, offset.y)),
            _ => None,
        })
        .collect();
    assert_eq!(translations, vec![(11.0, 11.0), (10.0, 10.0)]);

    let colors = device.colors();
    assert_relative_eq!(colors[0], Vec4::new(63.0 / 255.0, 63.0 / 255.0, 63.0 / 255.0, 1.0));
    assert_relative_eq!(colors[2], Vec4::new(1.0, 1.0, 1.0, 1.0));
}

#[test]
fn test_color_is_white_after_every_call() {
    let (font, mut device) = varied_font();
    for text in [&b"\x154"[..], &b"\x15"[..], &b"a\n\x15c"[..], &b"\x15r"[..]] {
        device.clear_commands();
        font.render(&mut device, text, 0.0, 0.0, 0x8000_00ff, true).unwrap();
        assert_eq!(device.colors().last(), Some(&WHITE));
        assert_eq!(device.matrix_depth(), 0);
    }
}
