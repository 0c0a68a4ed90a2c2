use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use shared::domain::{AccountRole, Route};
use tracing::info;

use crate::forms::{Credentials, Registration};

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1_500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInOutcome {
    pub email: String,
    pub role: AccountRole,
    pub redirect: Route,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub email: String,
    pub redirect: Route,
}

#[async_trait]
pub trait AccountService: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> Result<SignInOutcome>;
    async fn register(&self, registration: Registration) -> Result<RegistrationOutcome>;
}

/// Stand-in for the missing account backend: waits, logs, and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedAccountService {
    delay: Duration,
}

impl SimulatedAccountService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAccountService {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl AccountService for SimulatedAccountService {
    async fn sign_in(&self, credentials: Credentials) -> Result<SignInOutcome> {
        tokio::time::sleep(self.delay).await;

        // Admin and member logins land on the same page until a dashboard exists.
        let role = AccountRole::classify(&credentials.email);
        match role {
            AccountRole::Admin => info!(email = %credentials.email, "admin login successful"),
            AccountRole::Member => info!(email = %credentials.email, "user login successful"),
        }

        Ok(SignInOutcome {
            email: credentials.email,
            role,
            redirect: Route::Home,
        })
    }

    async fn register(&self, registration: Registration) -> Result<RegistrationOutcome> {
        tokio::time::sleep(self.delay).await;
        info!(email = %registration.email, "registration successful");

        Ok(RegistrationOutcome {
            email: registration.email,
            redirect: Route::Login,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::time::Instant;

    use super::*;

    fn credentials(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn sign_in_waits_for_the_configured_delay() {
        let service = SimulatedAccountService::default();
        let started = Instant::now();
        let outcome = service
            .sign_in(credentials("student@example.com"))
            .await
            .expect("sign in");
        assert!(started.elapsed() >= Duration::from_millis(1_500));
        assert_eq!(outcome.redirect, Route::Home);
        assert_eq!(outcome.role, AccountRole::Member);
    }

    #[tokio::test(start_paused = true)]
    async fn admin_and_member_sign_ins_share_a_redirect() {
        let service: Arc<dyn AccountService> =
            Arc::new(SimulatedAccountService::new(Duration::from_millis(10)));
        let admin = service
            .sign_in(credentials("admin@example.com"))
            .await
            .expect("admin");
        let member = service
            .sign_in(credentials("member@example.com"))
            .await
            .expect("member");
        assert_eq!(admin.role, AccountRole::Admin);
        assert_eq!(member.role, AccountRole::Member);
        assert_eq!(admin.redirect, member.redirect);
    }

    #[tokio::test(start_paused = true)]
    async fn registration_redirects_to_login() {
        let service = SimulatedAccountService::new(Duration::from_millis(1_500));
        let outcome = service
            .register(Registration {
                full_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                qualification: None,
                date_of_birth: None,
                password: "Abcdefg1!".into(),
            })
            .await
            .expect("register");
        assert_eq!(outcome.redirect, Route::Login);
        assert_eq!(outcome.email, "ada@example.com");
    }
}
