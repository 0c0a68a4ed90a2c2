use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use client_core::{load_settings, AccountService, SimulatedAccountService};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::Route;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{QuizMasterApp, StartupConfig};

const APP_TITLE: &str = "QuizMaster";

#[derive(Debug, Parser)]
#[command(name = "desktop_gui", about = "QuizMaster landing site")]
struct Args {
    /// Path of the first page to show, e.g. `/register`.
    #[arg(long, default_value = "/")]
    route: String,
    /// Settings file; defaults to `quizmaster.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;
    tracing::info!(?settings, "settings loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("quizmaster-rt")
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let service: Arc<dyn AccountService> =
        Arc::new(SimulatedAccountService::new(settings.submit_delay()));
    let _bridge = backend_bridge::runtime::launch(
        runtime.handle().clone(),
        service,
        cmd_rx,
        ui_tx.clone(),
    )
    .context("failed to start backend bridge")?;

    let startup = StartupConfig {
        initial_route: Route::parse(&args.route),
        settings,
    };
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(QuizMasterApp::bootstrap(
                cc.egui_ctx.clone(),
                handle,
                cmd_tx,
                ui_tx,
                ui_rx,
                startup,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with error: {err}"))?;

    tracing::info!("window closed");
    Ok(())
}
