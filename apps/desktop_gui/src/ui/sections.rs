//! Landing page sections: navbar, hero, features, testimonials and footer.

use client_core::{NavbarState, SlidePosition};
use eframe::egui;
use egui::RichText;
use shared::{
    content::{self, FooterLink, SectionHeading},
    domain::Route,
};

use crate::ui::{
    pages::{feature_card_delay_ms, HeroState, PageAction, TestimonialsState, HERO_STAGGER_MS},
    theme,
    widgets::{self, entrance, SectionReveal},
};

/// Below this width the navbar collapses into a toggled menu.
pub const COMPACT_NAV_WIDTH: f32 = 768.0;
const MAX_CONTENT_WIDTH: f32 = 1120.0;

/// Centers content in a column no wider than the landing layout.
fn container<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let available = ui.available_width();
    let width = available.min(MAX_CONTENT_WIDTH);
    let side = ((available - width) / 2.0).max(0.0) + 16.0;
    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width - 32.0);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

pub fn navbar_frame(scrolled: bool) -> egui::Frame {
    if scrolled {
        egui::Frame::NONE
            .fill(theme::PAGE_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .inner_margin(egui::Margin::symmetric(24, 10))
    } else {
        egui::Frame::NONE
            .fill(theme::PAGE_BACKGROUND)
            .inner_margin(egui::Margin::symmetric(24, 18))
    }
}

fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let text = if active {
        RichText::new(label).color(theme::PRIMARY).strong()
    } else {
        RichText::new(label).color(theme::TEXT_MUTED)
    };
    let response = ui
        .add(egui::Button::new(text).frame(false))
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if active {
        let rect = response.rect;
        ui.painter().hline(
            rect.x_range(),
            rect.bottom(),
            egui::Stroke::new(2.0, theme::PRIMARY),
        );
    }
    response
}

pub fn navbar(ui: &mut egui::Ui, navbar: &mut NavbarState, current: &Route) -> Option<Route> {
    let mut target = None;
    let compact = ui.available_width() < COMPACT_NAV_WIDTH;

    ui.horizontal(|ui| {
        let brand = ui
            .scope(|ui| {
                widgets::brand_mark(ui, 18.0);
                ui.label(RichText::new(content::BRAND_NAME).size(22.0).strong());
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if brand.clicked() {
            target = Some(Route::Home);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if compact {
                let glyph = if navbar.is_menu_open() { "✕" } else { "☰" };
                if ui
                    .add(egui::Button::new(RichText::new(glyph).size(20.0)).frame(false))
                    .on_hover_text("Toggle menu")
                    .clicked()
                {
                    navbar.toggle_menu();
                }
                return;
            }

            if ui.add(widgets::primary_button("Sign Up")).clicked() {
                target = Some(Route::Register);
            }
            if widgets::text_link(ui, "Log In", theme::FOREGROUND).clicked() {
                target = Some(Route::Login);
            }
            ui.add_space(24.0);
            for link in content::primary_nav().iter().rev() {
                if nav_link(ui, link.label, current == &link.route).clicked() {
                    target = Some(link.route.clone());
                }
            }
        });
    });

    if compact && navbar.is_menu_open() {
        ui.add_space(16.0);
        ui.vertical(|ui| {
            for link in content::primary_nav() {
                let active = current == &link.route;
                if nav_link(ui, link.label, active).clicked() {
                    target = Some(link.route.clone());
                }
                ui.add_space(8.0);
            }
            ui.add_space(16.0);
            let full = egui::vec2(ui.available_width(), 44.0);
            if ui.add(widgets::outline_button("Log In").min_size(full)).clicked() {
                target = Some(Route::Login);
            }
            if ui.add(widgets::primary_button("Sign Up").min_size(full)).clicked() {
                target = Some(Route::Register);
            }
        });
    }

    target
}

fn section_heading(ui: &mut egui::Ui, heading: &SectionHeading) {
    ui.vertical_centered(|ui| {
        widgets::section_badge(ui, heading.badge);
        ui.add_space(12.0);
        ui.label(RichText::new(heading.title).size(30.0).strong());
        ui.add_space(10.0);
        ui.set_max_width(640.0);
        ui.label(
            RichText::new(heading.subtitle)
                .size(16.0)
                .color(theme::TEXT_MUTED),
        );
    });
}

pub fn hero(ui: &mut egui::Ui, hero: &HeroState, now: f64) -> Option<PageAction> {
    let mut action = None;
    let step = |n: u32| hero.progress(now, n * HERO_STAGGER_MS);

    ui.add_space(48.0);
    container(ui, |ui| {
        ui.vertical_centered(|ui| {
            entrance(ui, step(0), |ui| widgets::section_badge(ui, content::HERO.tagline));
            entrance(ui, step(1), |ui| {
                ui.label(RichText::new(content::HERO.headline_lead).size(44.0).strong());
                ui.label(
                    RichText::new(content::HERO.headline_brand)
                        .size(44.0)
                        .strong()
                        .color(theme::PRIMARY),
                );
            });
            entrance(ui, step(2), |ui| {
                ui.set_max_width(620.0);
                ui.label(
                    RichText::new(content::HERO.description)
                        .size(18.0)
                        .color(theme::TEXT_MUTED),
                );
            });
            entrance(ui, step(3), |ui| {
                ui.horizontal(|ui| {
                    let buttons = 2.0 * 150.0 + ui.spacing().item_spacing.x;
                    ui.add_space(((ui.available_width() - buttons) / 2.0).max(0.0));
                    if ui
                        .add(widgets::primary_button(content::HERO.primary_cta).min_size(egui::vec2(150.0, 46.0)))
                        .clicked()
                    {
                        action = Some(PageAction::Navigate(Route::Register));
                    }
                    if ui
                        .add(widgets::outline_button(content::HERO.secondary_cta).min_size(egui::vec2(150.0, 46.0)))
                        .clicked()
                    {
                        action = Some(PageAction::Navigate(Route::Login));
                    }
                });
            });
            entrance(ui, step(4), |ui| {
                ui.columns(content::HERO_STATS.len(), |columns| {
                    for (column, stat) in columns.iter_mut().zip(content::HERO_STATS) {
                        column.vertical_centered(|ui| {
                            ui.label(RichText::new(stat.glyph).size(22.0).color(theme::PRIMARY));
                            ui.label(RichText::new(stat.value).size(24.0).strong());
                            ui.label(RichText::new(stat.label).color(theme::TEXT_MUTED));
                        });
                    }
                });
            });
        });
    });
    ui.add_space(48.0);

    action
}

fn feature_columns(width: f32) -> usize {
    if width >= 900.0 {
        3
    } else if width >= 600.0 {
        2
    } else {
        1
    }
}

fn feature_card(ui: &mut egui::Ui, feature: &content::Feature) {
    egui::Frame::NONE
        .fill(theme::PAGE_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(theme::CARD_RADIUS)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Frame::NONE
                .fill(theme::lighten_color(theme::PRIMARY, 0.9))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.label(RichText::new(feature.glyph).size(22.0));
                });
            ui.add_space(12.0);
            ui.label(RichText::new(feature.title).size(18.0).strong());
            ui.add_space(6.0);
            ui.label(RichText::new(feature.description).color(theme::TEXT_MUTED));
        });
}

pub fn features(ui: &mut egui::Ui, reveal: &mut SectionReveal, now: f64, viewport: egui::Rect) {
    let section = ui.scope(|ui| {
        ui.add_space(32.0);
        container(ui, |ui| {
            entrance(ui, reveal.progress(now, 0), |ui| {
                section_heading(ui, &content::FEATURES_HEADING);
            });
            ui.add_space(24.0);

            let per_row = feature_columns(ui.available_width());
            for (row, chunk) in content::FEATURES.chunks(per_row).enumerate() {
                ui.columns(per_row, |columns| {
                    for (offset, feature) in chunk.iter().enumerate() {
                        let index = row * per_row + offset;
                        let progress = reveal.progress(now, feature_card_delay_ms(index));
                        entrance(&mut columns[offset], progress, |ui| feature_card(ui, feature));
                    }
                });
            }
        });
        ui.add_space(32.0);
    });
    reveal.observe(section.response.rect, viewport, now);
}

fn testimonial_card(ui: &mut egui::Ui, testimonial: &content::Testimonial) {
    egui::Frame::NONE
        .fill(theme::PAGE_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(theme::CARD_RADIUS)
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("❝").size(28.0).color(theme::lighten_color(theme::PRIMARY, 0.5)));
            ui.label(RichText::new(testimonial.content).size(17.0).italics());
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                egui::Frame::NONE
                    .fill(theme::lighten_color(theme::PRIMARY, 0.85))
                    .corner_radius(theme::PILL_RADIUS)
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(testimonial.initials())
                                .strong()
                                .color(theme::PRIMARY),
                        );
                    });
                ui.vertical(|ui| {
                    ui.label(RichText::new(testimonial.author).strong());
                    ui.label(RichText::new(testimonial.role).size(13.0).color(theme::TEXT_MUTED));
                });
            });
        });
}

fn slide_dot(ui: &mut egui::Ui, position: SlidePosition) -> egui::Response {
    let size = match position {
        SlidePosition::Active => egui::vec2(28.0, 10.0),
        SlidePosition::Before | SlidePosition::After => egui::vec2(10.0, 10.0),
    };
    let color = match position {
        SlidePosition::Active => theme::PRIMARY,
        SlidePosition::Before => theme::lighten_color(theme::PRIMARY, 0.6),
        SlidePosition::After => theme::BORDER,
    };
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter().rect_filled(rect, 5.0, color);
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn testimonials(
    ui: &mut egui::Ui,
    state: &mut TestimonialsState,
    now: f64,
    viewport: egui::Rect,
) {
    let progress = state.reveal.progress(now, 0);
    let mut selected = None;

    let section = ui.scope(|ui| {
        egui::Frame::NONE
            .fill(theme::SURFACE_MUTED)
            .inner_margin(egui::Margin::symmetric(0, 40))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                container(ui, |ui| {
                    entrance(ui, progress, |ui| {
                        section_heading(ui, &content::TESTIMONIALS_HEADING);
                        ui.add_space(24.0);

                        let active = state.carousel.active_index();
                        if let Some(testimonial) = content::TESTIMONIALS.get(active) {
                            ui.vertical_centered(|ui| {
                                ui.set_max_width(760.0);
                                testimonial_card(ui, testimonial);
                            });
                        }

                        ui.add_space(16.0);
                        ui.horizontal(|ui| {
                            let count = state.carousel.slide_count() as f32;
                            let dots = 28.0 + (count - 1.0) * 10.0
                                + (count - 1.0) * ui.spacing().item_spacing.x;
                            ui.add_space(((ui.available_width() - dots) / 2.0).max(0.0));
                            for index in 0..state.carousel.slide_count() {
                                let response = slide_dot(ui, state.carousel.slide_position(index))
                                    .on_hover_text(format!("Go to testimonial {}", index + 1));
                                if response.clicked() {
                                    selected = Some(index);
                                }
                            }
                        });
                    });
                });
            });
    });

    if let Some(index) = selected {
        if let Err(err) = state.carousel.select(index) {
            tracing::warn!(error = %err, "ignoring testimonial selection");
        }
    }
    state.reveal.observe(section.response.rect, viewport, now);
}

fn page_intro(ui: &mut egui::Ui, heading: &SectionHeading) {
    ui.add_space(56.0);
    container(ui, |ui| section_heading(ui, heading));
    ui.add_space(32.0);
}

pub fn about(ui: &mut egui::Ui) {
    page_intro(ui, &content::ABOUT_HEADING);
    container(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(640.0);
            for principle in content::ABOUT_PRINCIPLES {
                ui.label(RichText::new(format!("✔  {principle}")).size(16.0));
                ui.add_space(8.0);
            }
        });
    });
    ui.add_space(48.0);
}

pub fn contact(ui: &mut egui::Ui) {
    page_intro(ui, &content::CONTACT_HEADING);
    container(ui, |ui| {
        ui.columns(3, |columns| {
            let entries = [
                ("✉", "Email", content::CONTACT.email),
                ("☎", "Phone", content::CONTACT.phone),
                ("⌂", "Address", content::CONTACT.address),
            ];
            for (column, (glyph, label, value)) in columns.iter_mut().zip(entries) {
                egui::Frame::NONE
                    .fill(theme::SURFACE_MUTED)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .corner_radius(theme::CARD_RADIUS)
                    .inner_margin(egui::Margin::same(20))
                    .show(column, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(glyph).size(22.0).color(theme::PRIMARY));
                        ui.label(RichText::new(label).strong());
                        ui.label(RichText::new(value).color(theme::TEXT_MUTED));
                    });
            }
        });
    });
    ui.add_space(48.0);
}

fn footer_column(ui: &mut egui::Ui, title: &str, links: &[FooterLink]) -> Option<PageAction> {
    let mut action = None;
    ui.label(RichText::new(title).strong());
    ui.add_space(8.0);
    for link in links {
        if widgets::text_link(ui, link.label, theme::TEXT_MUTED).clicked() {
            action = Some(PageAction::Navigate(link.route()));
        }
    }
    action
}

pub fn footer(ui: &mut egui::Ui) -> Option<PageAction> {
    let mut action = None;

    egui::Frame::NONE
        .fill(theme::SURFACE_MUTED)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .inner_margin(egui::Margin::symmetric(0, 40))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            container(ui, |ui| {
                ui.columns(4, |columns| {
                    columns[0].horizontal(|ui| {
                        widgets::brand_mark(ui, 16.0);
                        ui.label(RichText::new(content::BRAND_NAME).size(18.0).strong());
                    });
                    columns[0].label(RichText::new(content::FOOTER_TAGLINE).color(theme::TEXT_MUTED));
                    columns[0].horizontal_wrapped(|ui| {
                        for network in content::SOCIAL_LINKS {
                            ui.label(RichText::new(network).size(12.0).color(theme::TEXT_FAINT));
                        }
                    });

                    if let Some(hit) = footer_column(&mut columns[1], "Quick Links", &content::FOOTER_QUICK_LINKS) {
                        action = Some(hit);
                    }
                    if let Some(hit) = footer_column(&mut columns[2], "Resources", &content::FOOTER_RESOURCES) {
                        action = Some(hit);
                    }

                    let contact = &mut columns[3];
                    contact.label(RichText::new("Contact Us").strong());
                    contact.add_space(8.0);
                    for line in [content::CONTACT.address, content::CONTACT.phone, content::CONTACT.email] {
                        contact.label(RichText::new(line).color(theme::TEXT_MUTED));
                    }
                });

                ui.add_space(24.0);
                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(content::copyright_line())
                            .size(13.0)
                            .color(theme::TEXT_FAINT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for link in content::FOOTER_LEGAL.iter().rev() {
                            if widgets::text_link(ui, link.label, theme::TEXT_FAINT).clicked() {
                                action = Some(PageAction::Navigate(link.route()));
                            }
                        }
                    });
                });
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_grid_narrows_with_the_window() {
        assert_eq!(feature_columns(1200.0), 3);
        assert_eq!(feature_columns(700.0), 2);
        assert_eq!(feature_columns(400.0), 1);
    }

    #[test]
    fn footer_legal_links_point_at_missing_pages() {
        for link in content::FOOTER_LEGAL {
            assert!(link.route().is_not_found());
        }
    }
}
