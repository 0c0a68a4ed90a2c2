use super::*;

use std::time::Duration;

use shared::{content::TESTIMONIALS, domain::Route, error::FormError};
use tokio::{
    runtime::Handle,
    sync::mpsc,
    time::{self, Instant},
};

const ROTATION: Duration = Duration::from_millis(5_000);

fn tick_channel() -> (
    mpsc::UnboundedSender<()>,
    mpsc::UnboundedReceiver<()>,
) {
    mpsc::unbounded_channel()
}

#[tokio::test(start_paused = true)]
async fn timer_driven_carousel_lands_on_tick_count_mod_len() {
    let (tx, mut rx) = tick_channel();
    let mut carousel = Carousel::new(TESTIMONIALS.len()).expect("testimonials");
    let timer = RepeatingTimer::start(&Handle::current(), ROTATION, move || {
        let _ = tx.send(());
    });

    for k in 1..=7 {
        rx.recv().await.expect("tick");
        carousel.tick();
        assert_eq!(carousel.active_index(), k % TESTIMONIALS.len());
    }

    // Tearing down the view drops the timer, which closes the channel.
    drop(timer);
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn manual_selection_does_not_reset_the_rotation_timer() {
    let (tx, mut rx) = tick_channel();
    let mut carousel = Carousel::new(3).expect("non-empty");
    let started = Instant::now();
    let _timer = RepeatingTimer::start(&Handle::current(), ROTATION, move || {
        let _ = tx.send(());
    });

    time::sleep(Duration::from_millis(2_000)).await;
    carousel.select(2).expect("in range");

    rx.recv().await.expect("tick");
    assert_eq!(started.elapsed(), ROTATION);
    carousel.tick();
    assert_eq!(carousel.active_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn valid_login_navigates_home_after_the_delay() {
    let service = SimulatedAccountService::default();
    let mut navigator = Navigator::new(Route::Login);
    let mut form = LoginForm::default();
    form.email = "admin@quizmaster.com".into();
    form.password = "whatever".into();

    let started = Instant::now();
    let credentials = form.submit().expect("valid form");
    let outcome = service.sign_in(credentials).await.expect("sign in");
    form.complete();
    navigator.navigate(outcome.redirect);

    assert!(started.elapsed() >= DEFAULT_SUBMIT_DELAY);
    assert_eq!(navigator.current(), &Route::Home);
    assert!(!form.is_loading());
}

#[tokio::test(start_paused = true)]
async fn blocked_login_incurs_no_delay_and_no_navigation() {
    let navigator = Navigator::new(Route::Login);
    let page = navigator.page();
    let mut form = LoginForm::default();
    form.email = String::new();
    form.password = "x".into();

    let started = Instant::now();
    assert_eq!(form.submit(), Err(FormError::MissingFields));

    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(navigator.current(), &Route::Login);
    assert_eq!(navigator.page(), page);
}

#[tokio::test(start_paused = true)]
async fn registration_mismatch_stays_on_the_register_page() {
    let navigator = Navigator::new(Route::Register);
    let mut form = RegistrationForm::default();
    form.full_name = "Grace Hopper".into();
    form.email = "grace@example.com".into();
    form.password = "abcdefgh".into();
    form.confirm_password = "abcdefghx".into();

    assert_eq!(form.submit(), Err(FormError::PasswordMismatch));
    assert_eq!(navigator.current(), &Route::Register);
}

#[tokio::test(start_paused = true)]
async fn successful_registration_redirects_to_login() {
    let service = SimulatedAccountService::new(Duration::from_millis(1_500));
    let mut navigator = Navigator::new(Route::Register);
    let mut form = RegistrationForm::default();
    form.full_name = "Grace Hopper".into();
    form.email = "grace@example.com".into();
    form.password = "Cobol1959!".into();
    form.confirm_password = "Cobol1959!".into();

    let registration = form.submit().expect("valid form");
    let outcome = service.register(registration).await.expect("register");
    navigator.navigate(outcome.redirect);
    assert_eq!(navigator.current(), &Route::Login);
}

#[test]
fn reveal_and_strength_are_reexported() {
    let mut reveal = ViewportReveal::new(0.1);
    assert!(reveal.observe(0.75));
    assert_eq!(evaluate("Abcdefg1!").label, StrengthLabel::Strong);
}
