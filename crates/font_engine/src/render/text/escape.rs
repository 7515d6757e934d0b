//! Escape-code scanner
//!
//! A single pass over a text buffer that turns raw bytes into [`TextEvent`]s.
//! The renderer and the width measurer both consume this iterator, so the two
//! can never disagree about which bytes produce glyphs.

use super::color_table::hex_digit_value;

/// Byte that introduces an inline formatting code
pub const ESCAPE_MARKER: u8 = 0x15;

/// What a stretch of text means to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    /// A plain glyph from the text, subject to the per-line draw cap
    Literal(u8),
    /// A glyph produced by an escape sequence: the marker itself, or the
    /// byte of an unrecognized code. Always drawn.
    Escaped(u8),
    /// End of the current line
    LineBreak,
    /// Switch to palette color `0..16`
    SetColor(u8),
    /// Return to the call's starting color
    ResetColor,
}

/// Iterator over the [`TextEvent`]s of a byte buffer
#[derive(Debug, Clone)]
pub struct EscapeScanner<'a> {
    text: &'a [u8],
    position: usize,
    pending: Option<TextEvent>,
}

impl<'a> EscapeScanner<'a> {
    /// Scan `text` from the start
    #[must_use]
    pub const fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            position: 0,
            pending: None,
        }
    }

    /// Byte offset of the next unread byte
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.text.get(self.position).copied()?;
        self.position += 1;
        Some(byte)
    }

    /// Resolve the byte after a marker. `None` means the pair was absorbed.
    fn escape(&mut self) -> Option<TextEvent> {
        let Some(code) = self.next_byte() else {
            // Trailing marker draws itself
            return Some(TextEvent::Escaped(ESCAPE_MARKER));
        };

        match code {
            b'\n' => None,
            b'r' => Some(TextEvent::ResetColor),
            ESCAPE_MARKER => Some(TextEvent::Escaped(ESCAPE_MARKER)),
            _ => match hex_digit_value(code) {
                Some(index) => Some(TextEvent::SetColor(index)),
                None => {
                    self.pending = Some(TextEvent::Escaped(code));
                    Some(TextEvent::Escaped(ESCAPE_MARKER))
                }
            },
        }
    }
}

impl Iterator for EscapeScanner<'_> {
    type Item = TextEvent;

    fn next(&mut self) -> Option<TextEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        loop {
            let event = match self.next_byte()? {
                b'\n' => Some(TextEvent::LineBreak),
                ESCAPE_MARKER => self.escape(),
                byte => Some(TextEvent::Literal(byte)),
            };
            if event.is_some() {
                return event;
            }
        }
    }
}
