//! Per-route page state. A page owns its timers and forms; replacing the page
//! on navigation drops them, which stops the timers.

use client_core::{
    Carousel, Credentials, LoginForm, OneShotTimer, Registration, RegistrationForm,
    RepeatingTimer, RevealState, Settings,
};
use crossbeam_channel::Sender;
use eframe::egui;
use shared::{
    content::TESTIMONIALS,
    domain::{PageInstanceId, Route},
};
use tokio::runtime::Handle;

use crate::controller::events::UiEvent;
use crate::ui::{
    auth, sections,
    widgets::{entrance_progress, SectionReveal},
};

/// Stagger between hero blocks and the delay of the last one.
pub const HERO_STAGGER_MS: u32 = 100;
const HERO_LAST_BLOCK_DELAY_MS: u32 = 4 * HERO_STAGGER_MS;
/// Feature cards start after the heading and step per card.
pub const FEATURE_CARD_BASE_DELAY_MS: u32 = 300;
pub const FEATURE_CARD_STEP_MS: u32 = 100;

pub fn feature_card_delay_ms(index: usize) -> u32 {
    FEATURE_CARD_BASE_DELAY_MS + FEATURE_CARD_STEP_MS * index as u32
}

/// What a rendered page asks the app to do after the frame.
#[derive(Debug)]
pub enum PageAction {
    Navigate(Route),
    SignIn(Credentials),
    Register(Registration),
}

/// Everything a page needs to start its timers.
pub struct PageEnv<'a> {
    pub runtime: &'a Handle,
    pub ui_tx: &'a Sender<UiEvent>,
    pub repaint: &'a egui::Context,
    pub settings: &'a Settings,
}

fn post(ui_tx: &Sender<UiEvent>, repaint: &egui::Context, event: UiEvent) {
    if ui_tx.try_send(event).is_err() {
        tracing::debug!("ui event queue unavailable; dropping timer event");
    }
    repaint.request_repaint();
}

/// Hero content waits for a deferred activation instead of a viewport check.
pub struct HeroState {
    state: RevealState,
    activated_at: Option<f64>,
    _activation: OneShotTimer,
}

impl HeroState {
    fn mount(page: PageInstanceId, env: &PageEnv<'_>) -> Self {
        let ui_tx = env.ui_tx.clone();
        let repaint = env.repaint.clone();
        let activation = OneShotTimer::start(env.runtime, env.settings.hero_reveal_delay(), move || {
            post(&ui_tx, &repaint, UiEvent::HeroActivated { page });
        });
        Self {
            state: RevealState::Pending,
            activated_at: None,
            _activation: activation,
        }
    }

    pub fn activate(&mut self, now: f64) {
        if self.state.reveal() {
            self.activated_at = Some(now);
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub fn progress(&self, now: f64, delay_ms: u32) -> f32 {
        self.activated_at
            .map(|at| entrance_progress(now - at, delay_ms))
            .unwrap_or(0.0)
    }

    fn is_animating(&self, now: f64) -> bool {
        self.activated_at.is_some() && self.progress(now, HERO_LAST_BLOCK_DELAY_MS) < 1.0
    }
}

pub struct TestimonialsState {
    pub reveal: SectionReveal,
    pub carousel: Carousel,
    _rotation: RepeatingTimer,
}

impl TestimonialsState {
    fn mount(page: PageInstanceId, env: &PageEnv<'_>) -> Option<Self> {
        let carousel = Carousel::new(TESTIMONIALS.len())?;
        let ui_tx = env.ui_tx.clone();
        let repaint = env.repaint.clone();
        let rotation =
            RepeatingTimer::start(env.runtime, env.settings.carousel_interval(), move || {
                post(&ui_tx, &repaint, UiEvent::CarouselTick { page });
            });
        Some(Self {
            reveal: SectionReveal::new(env.settings.reveal_threshold),
            carousel,
            _rotation: rotation,
        })
    }
}

pub struct HomePage {
    pub hero: HeroState,
    pub features: SectionReveal,
    pub testimonials: Option<TestimonialsState>,
}

pub enum PageState {
    Home(HomePage),
    Features(SectionReveal),
    About,
    Contact,
    Login(LoginForm),
    Register(RegistrationForm),
    NotFound { path: String },
}

impl PageState {
    pub fn mount(route: &Route, page: PageInstanceId, env: &PageEnv<'_>) -> Self {
        match route {
            Route::Home => Self::Home(HomePage {
                hero: HeroState::mount(page, env),
                features: SectionReveal::new(env.settings.reveal_threshold),
                testimonials: TestimonialsState::mount(page, env),
            }),
            Route::Features => Self::Features(SectionReveal::new(env.settings.reveal_threshold)),
            Route::About => Self::About,
            Route::Contact => Self::Contact,
            Route::Login => Self::Login(LoginForm::default()),
            Route::Register => Self::Register(RegistrationForm::default()),
            Route::NotFound(path) => Self::NotFound { path: path.clone() },
        }
    }

    /// Marketing pages get the navbar and footer; auth and 404 pages stand alone.
    pub fn has_site_chrome(&self) -> bool {
        matches!(
            self,
            Self::Home(_) | Self::Features(_) | Self::About | Self::Contact
        )
    }

    pub fn on_carousel_tick(&mut self) {
        if let Self::Home(HomePage {
            testimonials: Some(testimonials),
            ..
        }) = self
        {
            let active = testimonials.carousel.tick();
            tracing::trace!(active, "testimonial rotated");
        }
    }

    pub fn on_hero_activated(&mut self, now: f64) {
        if let Self::Home(home) = self {
            home.hero.activate(now);
        }
    }

    /// Clears the loading flag of whichever form is mounted.
    pub fn finish_submission(&mut self) {
        match self {
            Self::Login(form) => form.complete(),
            Self::Register(form) => form.complete(),
            _ => {}
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            Self::Login(form) => form.is_loading(),
            Self::Register(form) => form.is_loading(),
            _ => false,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        match self {
            Self::Home(home) => {
                home.hero.is_animating(now)
                    || home
                        .features
                        .is_animating(now, feature_card_delay_ms(shared::content::FEATURES.len()))
                    || home
                        .testimonials
                        .as_ref()
                        .is_some_and(|t| t.reveal.is_animating(now, 0))
            }
            Self::Features(reveal) => {
                reveal.is_animating(now, feature_card_delay_ms(shared::content::FEATURES.len()))
            }
            _ => false,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, now: f64, viewport: egui::Rect) -> Option<PageAction> {
        let mut action = match self {
            Self::Home(home) => {
                let hero = sections::hero(ui, &home.hero, now);
                sections::features(ui, &mut home.features, now, viewport);
                if let Some(testimonials) = home.testimonials.as_mut() {
                    sections::testimonials(ui, testimonials, now, viewport);
                }
                hero
            }
            Self::Features(reveal) => {
                ui.add_space(24.0);
                sections::features(ui, reveal, now, viewport);
                None
            }
            Self::About => {
                sections::about(ui);
                None
            }
            Self::Contact => {
                sections::contact(ui);
                None
            }
            Self::Login(form) => auth::login_page(ui, form),
            Self::Register(form) => auth::register_page(ui, form),
            Self::NotFound { path } => auth::not_found_page(ui, path),
        };

        if self.has_site_chrome() {
            if let Some(footer) = sections::footer(ui) {
                action = Some(footer);
            }
        }
        action
    }
}
