//! Small reusable widgets and the entrance animation used by revealed sections.

use client_core::{PasswordStrength, ViewportReveal};
use eframe::egui;
use egui::{Color32, RichText};

use crate::ui::theme;

pub const ENTRANCE_DURATION_MS: u32 = 700;
const ENTRANCE_LIFT: f32 = 28.0;

/// Fraction of `region`'s area inside `viewport`, in [0, 1].
pub fn visible_fraction(region: egui::Rect, viewport: egui::Rect) -> f32 {
    let area = region.area();
    if !region.is_positive() || area <= 0.0 {
        return 0.0;
    }
    let overlap = region.intersect(viewport);
    if !overlap.is_positive() {
        return 0.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Animation progress in [0, 1] for content revealed `elapsed_secs` ago with a
/// per-block `delay_ms`.
pub fn entrance_progress(elapsed_secs: f64, delay_ms: u32) -> f32 {
    let started = elapsed_secs * 1000.0 - f64::from(delay_ms);
    (started / f64::from(ENTRANCE_DURATION_MS)).clamp(0.0, 1.0) as f32
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Viewport reveal plus the moment it happened, so blocks can be staggered.
pub struct SectionReveal {
    reveal: ViewportReveal,
    revealed_at: Option<f64>,
}

impl SectionReveal {
    pub fn new(threshold: f32) -> Self {
        Self {
            reveal: ViewportReveal::new(threshold),
            revealed_at: None,
        }
    }

    pub fn observe(&mut self, region: egui::Rect, viewport: egui::Rect, now: f64) {
        if self.reveal.observe(visible_fraction(region, viewport)) {
            self.revealed_at = Some(now);
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn progress(&self, now: f64, delay_ms: u32) -> f32 {
        self.revealed_at
            .map(|at| entrance_progress(now - at, delay_ms))
            .unwrap_or(0.0)
    }

    /// True while a block with `max_delay_ms` could still be moving.
    pub fn is_animating(&self, now: f64, max_delay_ms: u32) -> bool {
        match self.revealed_at {
            Some(at) => entrance_progress(now - at, max_delay_ms) < 1.0,
            None => false,
        }
    }
}

/// Renders `add_contents` faded and lifted according to `progress`. The block
/// always occupies its final height so visibility measurements stay stable.
pub fn entrance<R>(
    ui: &mut egui::Ui,
    progress: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let eased = ease_out_cubic(progress.clamp(0.0, 1.0));
    let lift = (1.0 - eased) * ENTRANCE_LIFT;
    ui.scope(|ui| {
        ui.set_opacity(eased);
        ui.add_space(lift);
        let inner = add_contents(ui);
        ui.add_space(ENTRANCE_LIFT - lift);
        inner
    })
    .inner
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).strong().color(Color32::WHITE))
        .fill(theme::PRIMARY)
        .stroke(egui::Stroke::NONE)
        .corner_radius(theme::PILL_RADIUS)
        .min_size(egui::vec2(132.0, 40.0))
}

pub fn outline_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).strong())
        .fill(theme::SURFACE_MUTED)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(theme::PILL_RADIUS)
        .min_size(egui::vec2(132.0, 40.0))
}

/// Borderless text button used for in-page links.
pub fn text_link(ui: &mut egui::Ui, text: &str, color: Color32) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(color)).frame(false),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn brand_mark(ui: &mut egui::Ui, size: f32) {
    egui::Frame::NONE
        .fill(theme::PRIMARY)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(shared::content::BRAND_MARK)
                    .size(size)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

pub fn error_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::NONE
        .fill(theme::ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, theme::ERROR_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(theme::ERROR_TEXT).size(13.0));
        });
}

pub fn section_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(theme::lighten_color(theme::PRIMARY, 0.93))
        .stroke(egui::Stroke::new(
            1.0,
            theme::lighten_color(theme::PRIMARY, 0.85),
        ))
        .corner_radius(theme::PILL_RADIUS)
        .inner_margin(egui::Margin::symmetric(14, 5))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(13.0).color(theme::PRIMARY));
        });
}

/// Four-segment meter plus the rule checklist shown under the password field.
pub fn strength_meter(ui: &mut egui::Ui, strength: &PasswordStrength) {
    ui.horizontal(|ui| {
        let width = (ui.available_width() - 64.0).max(80.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 6.0), egui::Sense::hover());
        let fill = theme::strength_color(strength.score);
        let segments = PasswordStrength::MAX_SCORE;
        let gap = 4.0;
        let segment_width = (rect.width() - gap * f32::from(segments - 1)) / f32::from(segments);
        for segment in 0..segments {
            let min = rect.min + egui::vec2(f32::from(segment) * (segment_width + gap), 0.0);
            let bar = egui::Rect::from_min_size(min, egui::vec2(segment_width, rect.height()));
            let color = match fill {
                Some(color) if segment < strength.score => color,
                _ => theme::BORDER,
            };
            ui.painter().rect_filled(bar, 3.0, color);
        }
        ui.label(RichText::new(strength.label.as_str()).size(12.0).strong());
    });

    ui.add_space(4.0);
    egui::Grid::new("password_rules")
        .num_columns(2)
        .spacing(egui::vec2(16.0, 4.0))
        .show(ui, |ui| {
            for (index, (rule, met)) in strength.checklist().into_iter().enumerate() {
                let (mark, color) = if met {
                    ("✔", theme::SUCCESS_TEXT)
                } else {
                    ("•", theme::TEXT_FAINT)
                };
                ui.label(
                    RichText::new(format!("{mark} {}", rule.description()))
                        .size(12.0)
                        .color(color),
                );
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h))
    }

    #[test]
    fn fraction_of_a_fully_visible_region_is_one() {
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        assert_eq!(visible_fraction(rect(0.0, 100.0, 800.0, 200.0), viewport), 1.0);
    }

    #[test]
    fn fraction_counts_only_the_overlap() {
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let region = rect(0.0, 550.0, 800.0, 500.0);
        assert!((visible_fraction(region, viewport) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn regions_outside_the_viewport_are_invisible() {
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        assert_eq!(visible_fraction(rect(0.0, 600.0, 800.0, 100.0), viewport), 0.0);
        assert_eq!(visible_fraction(rect(0.0, 900.0, 800.0, 100.0), viewport), 0.0);
        assert_eq!(visible_fraction(egui::Rect::NOTHING, viewport), 0.0);
    }

    #[test]
    fn entrance_waits_for_its_delay_then_completes() {
        assert_eq!(entrance_progress(0.2, 300), 0.0);
        assert!((entrance_progress(0.65, 300) - 0.5).abs() < 1e-6);
        assert_eq!(entrance_progress(1.0, 300), 1.0);
        assert_eq!(entrance_progress(5.0, 0), 1.0);
    }

    #[test]
    fn section_reveal_records_when_it_happened() {
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let mut section = SectionReveal::new(0.1);
        section.observe(rect(0.0, 700.0, 800.0, 400.0), viewport, 1.0);
        assert!(!section.is_revealed());
        assert_eq!(section.progress(2.0, 0), 0.0);

        section.observe(rect(0.0, 500.0, 800.0, 400.0), viewport, 2.0);
        assert!(section.is_revealed());
        assert!(section.is_animating(2.3, 0));
        assert_eq!(section.progress(2.7, 0), 1.0);
        assert!(!section.is_animating(3.0, 200));

        // Scrolling away later does not restart anything.
        section.observe(rect(0.0, 5000.0, 800.0, 400.0), viewport, 9.0);
        assert!(section.is_revealed());
        assert_eq!(section.progress(9.0, 0), 1.0);
    }
}
