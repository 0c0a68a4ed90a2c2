//! Colors and visuals for the landing site.

use eframe::egui;
use egui::Color32;

pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
pub const FOREGROUND: Color32 = Color32::from_rgb(15, 23, 42);
pub const PAGE_BACKGROUND: Color32 = Color32::WHITE;
pub const SURFACE_MUTED: Color32 = Color32::from_rgb(249, 250, 251);
pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(75, 85, 99);
pub const TEXT_FAINT: Color32 = Color32::from_rgb(156, 163, 175);
pub const ERROR_FILL: Color32 = Color32::from_rgb(254, 242, 242);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(254, 226, 226);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38);
pub const SUCCESS_FILL: Color32 = Color32::from_rgb(220, 252, 231);
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(22, 163, 74);

pub const CARD_RADIUS: u8 = 12;
pub const PILL_RADIUS: u8 = 255;

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Fill for the strength meter; one color per score, none for an empty password.
pub fn strength_color(score: u8) -> Option<Color32> {
    match score {
        1 => Some(Color32::from_rgb(239, 68, 68)),
        2 => Some(Color32::from_rgb(234, 179, 8)),
        3 => Some(Color32::from_rgb(34, 197, 94)),
        4 => Some(Color32::from_rgb(16, 185, 129)),
        _ => None,
    }
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_BACKGROUND;
    visuals.window_fill = PAGE_BACKGROUND;
    visuals.extreme_bg_color = PAGE_BACKGROUND;
    visuals.faint_bg_color = SURFACE_MUTED;
    visuals.override_text_color = Some(FOREGROUND);
    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = lighten_color(PRIMARY, 0.75);
    visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, lighten_color(PRIMARY, 0.4));
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, PRIMARY);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(lighten_color(Color32::BLACK, 1.0), Color32::WHITE);
        assert_eq!(lighten_color(PRIMARY, 0.0), PRIMARY);
        let half = lighten_color(Color32::from_rgb(0, 100, 200), 0.5);
        assert_eq!((half.r(), half.g(), half.b()), (128, 178, 228));
    }

    #[test]
    fn meter_has_no_fill_for_an_empty_password() {
        assert!(strength_color(0).is_none());
        assert!(strength_color(4).is_some());
    }
}
