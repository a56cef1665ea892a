use eframe::egui;
use pdf_async_runtime::{ConvertCommand, WorkerHandle};
use pdf_images::image_io::SUPPORTED_EXTENSIONS;

use crate::state::AppState;
use crate::ui_components::{ImageListEditor, RowAction};

pub fn show(ui: &mut egui::Ui, state: &mut AppState, worker: &WorkerHandle) {
    egui::CollapsingHeader::new("🖼 Images")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let idle = !state.converting;

                if ui
                    .add_enabled(idle, egui::Button::new("➕ Select Images"))
                    .clicked()
                {
                    pick_images(state, worker);
                }

                if ui
                    .add_enabled(
                        idle && !state.selection.is_empty(),
                        egui::Button::new("✖ Remove Selected"),
                    )
                    .clicked()
                {
                    let removed = state.remove_selected();
                    if removed > 0 {
                        log::info!("Removed {} image(s) from the selection", removed);
                    }
                }

                if ui
                    .add_enabled(
                        state.single_selected_row().is_some(),
                        egui::Button::new("🔍 Preview"),
                    )
                    .clicked()
                {
                    if let Some(row) = state.single_selected_row() {
                        request_preview(state, row, worker);
                    }
                }
            });

            if state.validating {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Checking images...");
                });
            }

            ui.add_space(5.0);

            let names = state.selection.file_names();
            let selected = state.selected_rows.clone();
            let is_selected = |idx: usize| selected.contains(&idx);

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| {
                    if let Some((row, action)) = ImageListEditor::new(&names, &is_selected).show(ui)
                    {
                        apply_row_action(state, row, action, worker);
                    }
                });
        });
}

/// Send dropped or picked files to the worker for validation
pub fn add_paths(state: &mut AppState, paths: Vec<std::path::PathBuf>, worker: &WorkerHandle) {
    if paths.is_empty() {
        return;
    }
    log::info!("Checking {} file(s)", paths.len());
    state.validating = true;
    if !worker.send(ConvertCommand::ValidateImages { paths }) {
        state.validating = false;
        log::error!("Worker is not running");
    }
}

fn pick_images(state: &mut AppState, worker: &WorkerHandle) {
    if let Some(paths) = rfd::FileDialog::new()
        .set_title("Select Images")
        .add_filter("Images", SUPPORTED_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_files()
    {
        add_paths(state, paths, worker);
    }
}

fn request_preview(state: &AppState, row: usize, worker: &WorkerHandle) {
    if let Some(image) = state.selection.get(row) {
        let _ = worker.send(ConvertCommand::GeneratePreview {
            path: image.path().to_path_buf(),
        });
    }
}

fn apply_row_action(state: &mut AppState, row: usize, action: RowAction, worker: &WorkerHandle) {
    match action {
        RowAction::Click { toggle, extend } => state.click_row(row, toggle, extend),
        RowAction::Open => {
            state.click_row(row, false, false);
            request_preview(state, row, worker);
        }
        RowAction::MoveUp if !state.converting => {
            if state.selection.move_up(row) {
                state.selected_rows.clear();
            }
        }
        RowAction::MoveDown if !state.converting => {
            if state.selection.move_down(row) {
                state.selected_rows.clear();
            }
        }
        RowAction::MoveUp | RowAction::MoveDown => {}
    }
}
