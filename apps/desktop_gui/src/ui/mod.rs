//! UI layer for the desktop landing site: app shell, pages, sections and widgets.

pub mod app;
pub mod auth;
pub mod pages;
pub mod sections;
pub mod theme;
pub mod widgets;

pub use app::{QuizMasterApp, StartupConfig};
