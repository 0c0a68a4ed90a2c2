//! Sign-in, sign-up and not-found screens.

use client_core::{LoginForm, RegistrationForm};
use eframe::egui;
use egui::RichText;
use shared::{content, domain::Route};

use crate::ui::{pages::PageAction, theme, widgets};

const FIELD_HEIGHT: f32 = 36.0;
const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

fn auth_card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let avail = ui.available_size();
    let card_width = avail.x.clamp(360.0, 460.0);
    ui.add_space((avail.y * 0.08).clamp(16.0, 72.0));

    ui.vertical_centered(|ui| {
        ui.set_width(card_width);
        egui::Frame::NONE
            .fill(theme::PAGE_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .corner_radius(theme::CARD_RADIUS)
            .inner_margin(egui::Margin::same(28))
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), add_contents)
                    .inner
            })
            .inner
    })
    .inner
}

fn card_header(ui: &mut egui::Ui, title: &str, subtitle: &str) -> Option<PageAction> {
    let mut action = None;
    if widgets::text_link(ui, "← Back to Home", theme::PRIMARY).clicked() {
        action = Some(PageAction::Navigate(Route::Home));
    }
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        widgets::brand_mark(ui, 20.0);
        ui.label(RichText::new(content::BRAND_NAME).size(22.0).strong());
    });
    ui.add_space(12.0);
    ui.label(RichText::new(title).size(28.0).strong());
    ui.label(RichText::new(subtitle).color(theme::TEXT_MUTED));
    ui.add_space(16.0);
    action
}

fn field_label(ui: &mut egui::Ui, label: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(RichText::new(label).strong().size(13.0));
        if required {
            ui.label(RichText::new("*").color(theme::ERROR_TEXT));
        }
    });
}

fn text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    hint: &str,
    value: &mut String,
    password: bool,
) -> egui::Response {
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .password(password)
        .hint_text(RichText::new(hint).color(theme::TEXT_FAINT))
        .margin(egui::Margin::symmetric(10, 8))
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), FIELD_HEIGHT], edit)
}

/// Password input with a Show/Hide toggle. Returns the text edit response and
/// whether the toggle was clicked this frame.
fn password_field(
    ui: &mut egui::Ui,
    id: &'static str,
    value: &mut String,
    visible: bool,
) -> (egui::Response, bool) {
    ui.horizontal(|ui| {
        let toggle_width = 52.0;
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .password(!visible)
            .hint_text(RichText::new("••••••••").color(theme::TEXT_FAINT))
            .margin(egui::Margin::symmetric(10, 8))
            .desired_width(f32::INFINITY);
        let response = ui.add_sized(
            [ui.available_width() - toggle_width, FIELD_HEIGHT],
            edit,
        );
        let label = if visible { "Hide" } else { "Show" };
        let toggled = ui
            .add_sized(
                [toggle_width - ui.spacing().item_spacing.x, FIELD_HEIGHT],
                egui::Button::new(RichText::new(label).size(12.0).color(theme::TEXT_MUTED)),
            )
            .on_hover_text(if visible {
                "Hide password"
            } else {
                "Show password"
            })
            .clicked();
        (response, toggled)
    })
    .inner
}

fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn submit_button(ui: &mut egui::Ui, label: &str, loading: bool) -> bool {
    let button = widgets::primary_button(label)
        .corner_radius(8.0)
        .min_size(egui::vec2(ui.available_width(), 44.0));
    ui.add_enabled(!loading, button).clicked()
}

fn footer_prompt(ui: &mut egui::Ui, prompt: &str, link: &str) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(prompt).size(13.0).color(theme::TEXT_MUTED));
            clicked = widgets::text_link(ui, link, theme::PRIMARY).clicked();
        });
    });
    clicked
}

pub fn login_page(ui: &mut egui::Ui, form: &mut LoginForm) -> Option<PageAction> {
    auth_card(ui, |ui| {
        let mut action = card_header(ui, "Welcome back", "Please enter your details to sign in");

        if let Some(error) = form.error() {
            widgets::error_banner(ui, &error.to_string());
            ui.add_space(12.0);
        }

        field_label(ui, "Email", false);
        let email = text_field(ui, "login_email", "Enter your email", &mut form.email, false);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            field_label(ui, "Password", false);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::text_link(ui, "Forgot password?", theme::PRIMARY).clicked() {
                    action = Some(PageAction::Navigate(Route::parse(FORGOT_PASSWORD_PATH)));
                }
            });
        });
        let visible = form.is_password_visible();
        let (password, toggled) =
            password_field(ui, "login_password", &mut form.password, visible);
        if toggled {
            form.toggle_password_visibility();
        }
        ui.add_space(20.0);

        let loading = form.is_loading();
        let clicked = submit_button(ui, form.submit_label(), loading);
        let entered = !loading
            && (submitted_with_enter(ui, &email) || submitted_with_enter(ui, &password));
        if clicked || entered {
            match form.submit() {
                Ok(credentials) => action = Some(PageAction::SignIn(credentials)),
                Err(err) => tracing::debug!(error = %err, "login blocked by validation"),
            }
        }

        ui.add_space(16.0);
        if footer_prompt(ui, "Don't have an account?", "Sign up") {
            action = Some(PageAction::Navigate(Route::Register));
        }
        action
    })
}

pub fn register_page(ui: &mut egui::Ui, form: &mut RegistrationForm) -> Option<PageAction> {
    auth_card(ui, |ui| {
        let mut action = card_header(
            ui,
            "Create your account",
            "Please enter your details to sign up",
        );

        if let Some(error) = form.error() {
            widgets::error_banner(ui, &error.to_string());
            ui.add_space(12.0);
        }

        field_label(ui, "Full Name", true);
        let mut responses = vec![text_field(
            ui,
            "register_full_name",
            "Enter your full name",
            &mut form.full_name,
            false,
        )];
        ui.add_space(10.0);

        field_label(ui, "Email", true);
        responses.push(text_field(
            ui,
            "register_email",
            "Enter your email",
            &mut form.email,
            false,
        ));
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            field_label(&mut columns[0], "Qualification", false);
            responses.push(text_field(
                &mut columns[0],
                "register_qualification",
                "Your qualification",
                &mut form.qualification,
                false,
            ));
            field_label(&mut columns[1], "Date of Birth", false);
            responses.push(text_field(
                &mut columns[1],
                "register_date_of_birth",
                "YYYY-MM-DD",
                &mut form.date_of_birth,
                false,
            ));
        });
        ui.add_space(10.0);

        field_label(ui, "Password", true);
        let visible = form.is_password_visible();
        let (password, toggled) =
            password_field(ui, "register_password", &mut form.password, visible);
        responses.push(password);
        if toggled {
            form.toggle_password_visibility();
        }
        if !form.password.is_empty() {
            ui.add_space(6.0);
            widgets::strength_meter(ui, &form.password_strength());
        }
        ui.add_space(10.0);

        field_label(ui, "Confirm Password", true);
        let confirm_masked = !form.is_password_visible();
        responses.push(text_field(
            ui,
            "register_confirm_password",
            "••••••••",
            &mut form.confirm_password,
            confirm_masked,
        ));
        if form.confirmation_mismatch() {
            ui.label(
                RichText::new("Passwords do not match")
                    .size(13.0)
                    .color(theme::ERROR_TEXT),
            );
        }
        ui.add_space(20.0);

        let loading = form.is_loading();
        let clicked = submit_button(ui, form.submit_label(), loading);
        let entered = !loading && responses.iter().any(|r| submitted_with_enter(ui, r));
        if clicked || entered {
            match form.submit() {
                Ok(registration) => action = Some(PageAction::Register(registration)),
                Err(err) => tracing::debug!(error = %err, "registration blocked by validation"),
            }
        }

        ui.add_space(16.0);
        if footer_prompt(ui, "Already have an account?", "Sign in") {
            action = Some(PageAction::Navigate(Route::Login));
        }
        action
    })
}

pub fn not_found_page(ui: &mut egui::Ui, path: &str) -> Option<PageAction> {
    let mut action = None;
    auth_card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("404").size(48.0).strong().color(theme::PRIMARY));
            ui.add_space(8.0);
            ui.label(RichText::new("Page Not Found").size(28.0).strong());
            ui.label(
                RichText::new("The page you're looking for doesn't exist or has been moved.")
                    .color(theme::TEXT_MUTED),
            );
            ui.label(RichText::new(path).monospace().size(12.0).color(theme::TEXT_FAINT));
            ui.add_space(20.0);
            if ui
                .add(widgets::primary_button("⌂ Return to Home").corner_radius(8.0))
                .clicked()
            {
                action = Some(PageAction::Navigate(Route::Home));
            }
        });
    });
    action
}
