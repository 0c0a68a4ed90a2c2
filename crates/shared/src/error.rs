use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local validation failures surfaced inline on the login and registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

impl FormError {
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::MissingRequiredFields => "missing_required_fields",
            Self::PasswordMismatch => "password_mismatch",
            Self::PasswordTooShort => "password_too_short",
        }
    }
}
