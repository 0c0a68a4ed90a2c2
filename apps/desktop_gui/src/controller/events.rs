//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{RegistrationOutcome, SignInOutcome};
use shared::domain::PageInstanceId;

/// Everything that reaches the UI thread from timers and the backend bridge.
/// Page-scoped events carry the page instance that produced them.
pub enum UiEvent {
    CarouselTick {
        page: PageInstanceId,
    },
    HeroActivated {
        page: PageInstanceId,
    },
    SignedIn {
        page: PageInstanceId,
        outcome: SignInOutcome,
    },
    Registered {
        page: PageInstanceId,
        outcome: RegistrationOutcome,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    /// The command never reached the backend bridge.
    Transport,
    /// The account service ran the request and returned an error.
    Service,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    SignIn,
    Register,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn transport(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Transport,
            context,
            message: message.into(),
        }
    }

    pub fn service(context: UiErrorContext, err: &anyhow::Error) -> Self {
        Self {
            category: UiErrorCategory::Service,
            context,
            message: format!("{err:#}"),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner_text(&self) -> String {
        let action = match self.context {
            UiErrorContext::SignIn => "Sign in",
            UiErrorContext::Register => "Registration",
        };
        let kind = match self.category {
            UiErrorCategory::Transport => "Transport",
            UiErrorCategory::Service => "Service",
        };
        format!("{action} failed ({kind}): {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context as _};

    use super::*;

    #[test]
    fn transport_errors_name_the_failed_action() {
        let err = UiError::transport(UiErrorContext::Register, "queue is full");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::Register);
        assert_eq!(
            err.banner_text(),
            "Registration failed (Transport): queue is full"
        );
    }

    #[test]
    fn service_errors_keep_the_whole_error_chain() {
        let source: anyhow::Result<()> = Err(anyhow!("account locked"));
        let err = source.context("sign in rejected").unwrap_err();
        let err = UiError::service(UiErrorContext::SignIn, &err);
        assert_eq!(err.category(), UiErrorCategory::Service);
        assert_eq!(err.message(), "sign in rejected: account locked");
        assert!(err.banner_text().starts_with("Sign in failed (Service)"));
    }
}
