//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::AccountService;
use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Handle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Drains the command queue on a dedicated thread and runs each request on
/// the shared runtime. Requests are independent: no retry, no cancellation.
pub fn launch(
    runtime: Handle,
    service: Arc<dyn AccountService>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("backend-bridge".to_string())
        .spawn(move || {
            tracing::info!("backend bridge started");
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "processing ui->backend command");
                let service = Arc::clone(&service);
                let ui_tx = ui_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(service.as_ref(), cmd).await;
                    if ui_tx.send(event).is_err() {
                        tracing::debug!("ui event channel closed; dropping backend result");
                    }
                });
            }
            tracing::info!("backend bridge stopped");
        })
}

async fn run_command(service: &dyn AccountService, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::SignIn { page, credentials } => match service.sign_in(credentials).await
        {
            Ok(outcome) => UiEvent::SignedIn { page, outcome },
            Err(err) => UiEvent::Error(UiError::service(UiErrorContext::SignIn, &err)),
        },
        BackendCommand::Register { page, registration } => {
            match service.register(registration).await {
                Ok(outcome) => UiEvent::Registered { page, outcome },
                Err(err) => UiEvent::Error(UiError::service(UiErrorContext::Register, &err)),
            }
        }
    }
}
