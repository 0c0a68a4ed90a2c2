//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Queues a command without blocking the UI. A command that cannot be queued
/// comes back as a transport error for `context`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    context: UiErrorContext,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::transport(
            context,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(UiError::transport(
            context,
            "Backend command processor disconnected; restart the app",
        )),
    }
}

#[cfg(test)]
mod tests {
    use client_core::Credentials;
    use crossbeam_channel::bounded;
    use shared::domain::PageInstanceId;

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn sign_in() -> BackendCommand {
        BackendCommand::SignIn {
            page: PageInstanceId(1),
            credentials: Credentials {
                email: "a@b.c".into(),
                password: "pw".into(),
            },
        }
    }

    #[test]
    fn full_queue_is_a_transport_error() {
        let (tx, _rx) = bounded(1);
        assert!(dispatch_backend_command(&tx, sign_in(), UiErrorContext::SignIn).is_ok());
        let err = dispatch_backend_command(&tx, sign_in(), UiErrorContext::SignIn)
            .expect_err("queue full");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::SignIn);
        assert!(err.message().contains("queue is full"));
    }

    #[test]
    fn disconnected_processor_is_a_transport_error() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, sign_in(), UiErrorContext::Register)
            .expect_err("disconnected");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::Register);
        assert!(err.message().contains("disconnected"));
    }
}
