use std::time::Duration;

use client_core::{NavbarState, Navigator, Settings};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Route;
use tokio::runtime::Handle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{
    pages::{PageAction, PageEnv, PageState},
    sections, theme,
};

const IDLE_REPAINT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub initial_route: Route,
    pub settings: Settings,
}

pub struct QuizMasterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    ui_tx: Sender<UiEvent>,
    runtime: Handle,
    egui_ctx: egui::Context,

    settings: Settings,
    navigator: Navigator,
    navbar: NavbarState,
    page: PageState,

    status_banner: Option<UiError>,
    theme_applied: bool,
}

impl QuizMasterApp {
    pub fn bootstrap(
        egui_ctx: egui::Context,
        runtime: Handle,
        cmd_tx: Sender<BackendCommand>,
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let StartupConfig {
            initial_route,
            settings,
        } = startup;
        let navigator = Navigator::new(initial_route);
        let page = PageState::mount(
            navigator.current(),
            navigator.page(),
            &PageEnv {
                runtime: &runtime,
                ui_tx: &ui_tx,
                repaint: &egui_ctx,
                settings: &settings,
            },
        );

        Self {
            cmd_tx,
            ui_rx,
            ui_tx,
            runtime,
            egui_ctx,
            navbar: NavbarState::new(settings.nav_scroll_threshold),
            settings,
            navigator,
            page,
            status_banner: None,
            theme_applied: false,
        }
    }

    /// Replaces the mounted page. Dropping the old page stops its timers.
    fn navigate(&mut self, route: Route) {
        let page_id = self.navigator.navigate(route);
        self.navbar.on_route_change();
        self.page = PageState::mount(
            self.navigator.current(),
            page_id,
            &PageEnv {
                runtime: &self.runtime,
                ui_tx: &self.ui_tx,
                repaint: &self.egui_ctx,
                settings: &self.settings,
            },
        );
    }

    fn process_ui_events(&mut self, now: f64) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CarouselTick { page } => {
                    if page == self.navigator.page() {
                        self.page.on_carousel_tick();
                    }
                }
                UiEvent::HeroActivated { page } => {
                    if page == self.navigator.page() {
                        self.page.on_hero_activated(now);
                    }
                }
                UiEvent::SignedIn { page, outcome } => {
                    tracing::info!(
                        email = %outcome.email,
                        role = outcome.role.label(),
                        "signed in"
                    );
                    if page == self.navigator.page() {
                        self.page.finish_submission();
                    }
                    self.navigate(outcome.redirect);
                }
                UiEvent::Registered { page, outcome } => {
                    tracing::info!(email = %outcome.email, "account created");
                    if page == self.navigator.page() {
                        self.page.finish_submission();
                    }
                    self.navigate(outcome.redirect);
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        context = ?err.context(),
                        category = ?err.category(),
                        error = err.message(),
                        "request failed"
                    );
                    self.page.finish_submission();
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn handle_action(&mut self, action: PageAction) {
        let page = self.navigator.page();
        let (cmd, context) = match action {
            PageAction::Navigate(route) => {
                self.navigate(route);
                return;
            }
            PageAction::SignIn(credentials) => (
                BackendCommand::SignIn { page, credentials },
                UiErrorContext::SignIn,
            ),
            PageAction::Register(registration) => (
                BackendCommand::Register { page, registration },
                UiErrorContext::Register,
            ),
        };

        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd, context) {
            tracing::warn!(command = ?context, error = err.message(), "command not queued");
            self.page.finish_submission();
            self.status_banner = Some(err);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        ctx.set_visuals(theme::visuals());
        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        ctx.set_style(style);
        self.theme_applied = true;
    }

    fn show_status_banner(&mut self, ctx: &egui::Context) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        egui::TopBottomPanel::top("status_banner")
            .frame(
                egui::Frame::NONE
                    .fill(theme::ERROR_FILL)
                    .stroke(egui::Stroke::new(1.0, theme::ERROR_STROKE))
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(banner.banner_text()).color(theme::ERROR_TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
    }
}

impl eframe::App for QuizMasterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let now = ctx.input(|i| i.time);
        self.process_ui_events(now);
        self.show_status_banner(ctx);

        let mut action = None;

        if self.page.has_site_chrome() {
            egui::TopBottomPanel::top("navbar")
                .frame(sections::navbar_frame(self.navbar.is_scrolled()))
                .show(ctx, |ui| {
                    if let Some(route) =
                        sections::navbar(ui, &mut self.navbar, self.navigator.current())
                    {
                        action = Some(PageAction::Navigate(route));
                    }
                });
        }

        let background = if self.page.has_site_chrome() {
            theme::PAGE_BACKGROUND
        } else {
            theme::SURFACE_MUTED
        };
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                // A fresh id per page instance starts every page at the top.
                let output = egui::ScrollArea::vertical()
                    .id_salt(("page_scroll", self.navigator.page().0))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let viewport = ui.clip_rect();
                        self.page.show(ui, now, viewport)
                    });
                self.navbar.on_scroll(output.state.offset.y);
                if let Some(page_action) = output.inner {
                    action = Some(page_action);
                }
            });

        if let Some(action) = action {
            self.handle_action(action);
        }

        if self.page.is_animating(now) {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::PageInstanceId;

    use super::*;
    use crate::controller::events::UiErrorCategory;

    struct Harness {
        app: QuizMasterApp,
        ui_tx: Sender<UiEvent>,
        cmd_rx: Receiver<BackendCommand>,
        _runtime: tokio::runtime::Runtime,
    }

    fn harness(initial_route: Route) -> Harness {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(64);
        let app = QuizMasterApp::bootstrap(
            egui::Context::default(),
            runtime.handle().clone(),
            cmd_tx,
            ui_tx.clone(),
            ui_rx,
            StartupConfig {
                initial_route,
                settings: Settings::default(),
            },
        );
        Harness {
            app,
            ui_tx,
            cmd_rx,
            _runtime: runtime,
        }
    }

    fn active_testimonial(app: &QuizMasterApp) -> Option<usize> {
        match &app.page {
            PageState::Home(home) => home.testimonials.as_ref().map(|t| t.carousel.active_index()),
            _ => None,
        }
    }

    #[test]
    fn stale_carousel_ticks_are_ignored() {
        let mut h = harness(Route::Home);
        let mounted = h.app.navigator.page();

        h.ui_tx
            .send(UiEvent::CarouselTick { page: PageInstanceId(mounted.0 + 40) })
            .expect("send");
        h.ui_tx.send(UiEvent::CarouselTick { page: mounted }).expect("send");
        h.app.process_ui_events(0.0);

        assert_eq!(active_testimonial(&h.app), Some(1));
    }

    #[test]
    fn navigating_mounts_a_fresh_page_and_closes_the_menu() {
        let mut h = harness(Route::Home);
        let first = h.app.navigator.page();
        h.app.navbar.toggle_menu();

        h.app.handle_action(PageAction::Navigate(Route::Features));
        assert_eq!(h.app.navigator.current(), &Route::Features);
        assert_ne!(h.app.navigator.page(), first);
        assert!(!h.app.navbar.is_menu_open());
        assert!(matches!(h.app.page, PageState::Features(_)));

        h.app.handle_action(PageAction::Navigate(Route::parse("/missing")));
        assert!(matches!(&h.app.page, PageState::NotFound { path } if path == "/missing"));
        assert!(!h.app.page.has_site_chrome());
    }

    #[test]
    fn sign_in_is_queued_with_the_current_page() {
        let mut h = harness(Route::Login);
        let page = h.app.navigator.page();
        let credentials = match &mut h.app.page {
            PageState::Login(form) => {
                form.email = "user@example.com".into();
                form.password = "secret".into();
                form.submit().expect("valid form")
            }
            _ => panic!("login page expected"),
        };

        h.app.handle_action(PageAction::SignIn(credentials));
        match h.cmd_rx.try_recv() {
            Ok(BackendCommand::SignIn { page: queued, .. }) => assert_eq!(queued, page),
            _ => panic!("expected a queued sign-in"),
        }
        assert!(h.app.page.is_submitting());
    }

    #[test]
    fn disconnected_bridge_surfaces_a_banner_and_unlocks_the_form() {
        let Harness {
            mut app,
            cmd_rx,
            _runtime,
            ..
        } = harness(Route::Login);
        drop(cmd_rx);
        let credentials = match &mut app.page {
            PageState::Login(form) => {
                form.email = "user@example.com".into();
                form.password = "secret".into();
                form.submit().expect("valid form")
            }
            _ => panic!("login page expected"),
        };

        app.handle_action(PageAction::SignIn(credentials));
        assert!(!app.page.is_submitting());
        let banner = app.status_banner.as_ref().expect("banner");
        assert_eq!(banner.context(), UiErrorContext::SignIn);
        assert_eq!(banner.category(), UiErrorCategory::Transport);
    }
}
