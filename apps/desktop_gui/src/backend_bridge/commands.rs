//! Backend commands queued from UI to backend worker.

use client_core::{Credentials, Registration};
use shared::domain::PageInstanceId;

pub enum BackendCommand {
    SignIn {
        page: PageInstanceId,
        credentials: Credentials,
    },
    Register {
        page: PageInstanceId,
        registration: Registration,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SignIn { .. } => "sign_in",
            BackendCommand::Register { .. } => "register",
        }
    }
}
