//! Multi-line text field with a B/I/U formatting toolbar.

use egui::{self, RichText, Vec2};
use notekeeper_core::format::{Marker, Selection};
use crate::theme::*;

/// What happened to a formatted field this frame
#[derive(Debug, Default)]
pub struct FormattedOutput {
    /// The buffer was typed into or had a marker applied
    pub changed: bool,
    /// Text of a selection made this frame
    pub captured: Option<String>,
}

pub fn formatted_text(
    ui: &mut egui::Ui,
    text: &mut String,
    selection: &mut Selection,
    hint: &str,
    rows: usize,
) -> FormattedOutput {
    let mut out = FormattedOutput::default();

    ui.horizontal(|ui| {
        for marker in Marker::all() {
            let label = match marker {
                Marker::Bold => RichText::new(marker.button_label()).strong(),
                Marker::Italic => RichText::new(marker.button_label()).italics(),
                Marker::Underline => RichText::new(marker.button_label()).underline(),
            };
            let button = egui::Button::new(label.color(TEXT_PRIMARY))
                .fill(BG_SURFACE)
                .min_size(Vec2::new(24.0, 20.0));
            if ui.add(button).on_hover_text(marker.hint()).clicked() && selection.apply(text, *marker) {
                out.changed = true;
            }
        }
    });

    let output = egui::TextEdit::multiline(text)
        .hint_text(hint)
        .desired_rows(rows)
        .desired_width(f32::INFINITY)
        .show(ui);
    if output.response.changed() {
        selection.clear();
        out.changed = true;
    }
    if let Some(range) = output.cursor_range {
        out.captured = selection.capture(text, range.as_sorted_char_range());
    }

    out
}
