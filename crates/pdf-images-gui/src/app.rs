use eframe::egui;
use pdf_async_runtime::WorkerHandle;
use pdf_images::image_io::has_supported_extension;

use crate::logger::AppLogger;
use crate::state::AppState;
use crate::views::{self, PreviewWindow};

pub struct ImagesApp {
    state: AppState,
    worker: WorkerHandle,
    logger: AppLogger,
    preview: Option<PreviewWindow>,
}

impl ImagesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, worker: WorkerHandle, logger: AppLogger) -> Self {
        Self {
            state: AppState::default(),
            worker,
            logger,
            preview: None,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .filter(|path| has_supported_extension(path))
                .collect()
        });

        if !dropped.is_empty() && !self.state.converting {
            views::selection::add_paths(&mut self.state, dropped, &self.worker);
        }
    }
}

impl eframe::App for ImagesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Process all pending updates from worker
        while let Some(update) = self.worker.try_recv() {
            if let Some(preview) = self.state.apply_update(update) {
                // Replacing the window drops the previous texture
                self.preview = Some(PreviewWindow::new(ctx, &preview));
            }
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.state.status);
        });

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                views::log_panel::show(ui, &self.logger);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Images to PDF");
                ui.separator();

                views::selection::show(ui, &mut self.state, &self.worker);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                views::settings::show(ui, &mut self.state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                views::actions::show(ui, &mut self.state, &self.worker);
            });
        });

        if let Some(window) = &mut self.preview {
            if !window.show(ctx) {
                self.preview = None;
            }
        }

        if self.state.converting || self.state.validating {
            ctx.request_repaint(); // Keep updating during operations
        }
    }
}
