//! UI theme constants

use egui::{Color32, CornerRadius, RichText, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const BG_SURFACE: Color32 = Color32::from_rgb(55, 65, 81);
pub const BG_INPUT: Color32 = Color32::from_rgb(75, 85, 99);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
pub const EXTRACT_BG: Color32 = Color32::from_rgb(30, 58, 138);
pub const EXTRACT_FG: Color32 = Color32::from_rgb(191, 219, 254);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const CARD_PADDING: f32 = 12.0;

/// Filled button with primary text
pub fn action_button(label: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
}

/// Small grey caption above a form field
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_SECONDARY).small().strong());
}

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_fill = BG_INPUT;
    style.visuals.widgets.inactive.weak_bg_fill = BG_INPUT;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
