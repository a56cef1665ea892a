#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use eframe::egui;

mod app;
mod logger;
mod state;
mod ui_components;
mod views;

const MAX_LOG_ENTRIES: usize = 500;

fn main() -> Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES, log::LevelFilter::Info);
    logger.clone().init().context("Failed to install logger")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let worker = pdf_async_runtime::spawn_worker(runtime.handle());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_title("Images to PDF")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    log::info!("Ready");
    eframe::run_native(
        "Images to PDF",
        options,
        Box::new(move |cc| Ok(Box::new(app::ImagesApp::new(cc, worker, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the window: {e}"))
}
