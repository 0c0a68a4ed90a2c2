//! View-state controllers for the QuizMaster landing site.
//!
//! Everything here is owned by a single mounted page and driven from one UI
//! thread; timers run on a tokio runtime and only post notifications back.

pub mod account;
pub mod carousel;
pub mod config;
pub mod forms;
pub mod navigation;
pub mod password;
pub mod reveal;
pub mod timer;

pub use account::{
    AccountService, RegistrationOutcome, SignInOutcome, SimulatedAccountService,
    DEFAULT_SUBMIT_DELAY,
};
pub use carousel::{Carousel, CarouselError, SlidePosition};
pub use config::{load_settings, Settings};
pub use forms::{Credentials, LoginForm, Registration, RegistrationForm};
pub use navigation::{NavbarState, Navigator};
pub use password::{evaluate, PasswordStrength, RuleSet, StrengthLabel, StrengthRule};
pub use reveal::{RevealState, ViewportReveal};
pub use timer::{OneShotTimer, RepeatingTimer};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
