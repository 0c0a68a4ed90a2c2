//! Login and registration form state with local, synchronous validation.
//!
//! Each form owns a single error slot. `submit` clears it first, validates,
//! and either stores the new error or flips the form into its loading state
//! and hands back the payload to send.

use serde::Serialize;
use shared::error::FormError;

use crate::password::{evaluate, password_len, PasswordStrength, MIN_PASSWORD_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    show_password: bool,
    error: Option<FormError>,
    loading: bool,
}

impl LoginForm {
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn submit(&mut self) -> Result<Credentials, FormError> {
        self.error = None;

        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(FormError::MissingFields);
            return Err(FormError::MissingFields);
        }

        self.loading = true;
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn complete(&mut self) {
        self.loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Signing in..."
        } else {
            "Sign In"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub qualification: String,
    pub date_of_birth: String,
    pub password: String,
    pub confirm_password: String,
    show_password: bool,
    error: Option<FormError>,
    loading: bool,
}

impl RegistrationForm {
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Live strength of the password field; recomputed on every call.
    pub fn password_strength(&self) -> PasswordStrength {
        evaluate(&self.password)
    }

    /// Inline hint under the confirmation field, shown before any submit attempt.
    pub fn confirmation_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingRequiredFields);
        }

        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        if password_len(&self.password) < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }

        Ok(())
    }

    pub fn submit(&mut self) -> Result<Registration, FormError> {
        self.error = None;

        if let Err(err) = self.validate() {
            self.error = Some(err);
            return Err(err);
        }

        self.loading = true;
        Ok(Registration {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            qualification: non_empty(&self.qualification),
            date_of_birth: non_empty(&self.date_of_birth),
            password: self.password.clone(),
        })
    }

    pub fn complete(&mut self) {
        self.loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Creating account..."
        } else {
            "Create Account"
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
