//! Marker-based text formatting for plain-text buffers.
//!
//! Offsets are character offsets, the unit egui text widgets report for
//! their cursor range. Out-of-range offsets are clamped and reversed ranges
//! are normalised, so a stale selection never panics.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bold,
    Italic,
    Underline,
}

impl Marker {
    pub fn all() -> &'static [Marker] {
        &[Marker::Bold, Marker::Italic, Marker::Underline]
    }

    /// The characters placed on both sides of the selection
    pub fn token(&self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Underline => "__",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Marker::Bold => "B",
            Marker::Italic => "I",
            Marker::Underline => "U",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Marker::Bold => "Bold",
            Marker::Italic => "Italic",
            Marker::Underline => "Underline",
        }
    }
}

/// Wrap the characters in `start..end` with `marker`.
/// An empty selection returns the buffer unchanged.
pub fn wrap_selection(buffer: &str, start: usize, end: usize, marker: Marker) -> String {
    wrap_with(buffer, start..end, marker.token())
}

/// Wrap the characters in `range` with an arbitrary marker token.
pub fn wrap_with(buffer: &str, range: Range<usize>, token: &str) -> String {
    let bytes = byte_range(buffer, range);
    if bytes.is_empty() {
        return buffer.to_string();
    }

    let mut out = String::with_capacity(buffer.len() + token.len() * 2);
    out.push_str(&buffer[..bytes.start]);
    out.push_str(token);
    out.push_str(&buffer[bytes.clone()]);
    out.push_str(token);
    out.push_str(&buffer[bytes.end..]);
    out
}

/// Selection state of one formatted text field.
///
/// The text widget reports its cursor range every frame. Only a changed,
/// non-empty range counts as a new selection; a collapsed cursor keeps the
/// last one captured so a toolbar click can still use it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    range: Option<Range<usize>>,
    reported: Option<Range<usize>>,
}

impl Selection {
    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// Record a reported cursor range. Returns the newly selected text.
    pub fn capture(&mut self, buffer: &str, range: Range<usize>) -> Option<String> {
        if self.reported.as_ref() == Some(&range) {
            return None;
        }
        self.reported = Some(range.clone());
        let text = selected_text(buffer, range.clone())?.to_string();
        self.range = Some(range);
        Some(text)
    }

    /// Wrap the captured selection in `buffer` with `marker`, consuming it.
    pub fn apply(&mut self, buffer: &mut String, marker: Marker) -> bool {
        let Some(range) = self.range.take() else {
            return false;
        };
        let formatted = wrap_selection(buffer, range.start, range.end, marker);
        let changed = formatted != *buffer;
        *buffer = formatted;
        changed
    }

    /// Buffer edits invalidate the offsets of an older selection.
    pub fn clear(&mut self) {
        self.range = None;
        self.reported = None;
    }
}

/// The selected substring, or `None` for an empty selection.
pub fn selected_text(buffer: &str, range: Range<usize>) -> Option<&str> {
    let bytes = byte_range(buffer, range);
    if bytes.is_empty() {
        None
    } else {
        Some(&buffer[bytes])
    }
}

fn byte_range(buffer: &str, range: Range<usize>) -> Range<usize> {
    let (lo, hi) = if range.start <= range.end {
        (range.start, range.end)
    } else {
        (range.end, range.start)
    };
    byte_offset(buffer, lo)..byte_offset(buffer, hi)
}

fn byte_offset(buffer: &str, char_index: usize) -> usize {
    buffer
        .char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(buffer.len())
}
