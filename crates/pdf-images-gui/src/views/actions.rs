use eframe::egui;
use pdf_async_runtime::{ConvertCommand, WorkerHandle};

use crate::state::AppState;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, worker: &WorkerHandle) {
    ui.vertical(|ui| {
        ui.add(
            egui::ProgressBar::new(state.progress)
                .show_percentage()
                .animate(state.converting),
        );

        ui.add_space(5.0);

        if ui
            .add_enabled(
                state.can_convert(),
                egui::Button::new("📄 Convert to PDF").min_size(egui::vec2(160.0, 28.0)),
            )
            .clicked()
        {
            start_conversion(state, worker);
        }
    });
}

fn start_conversion(state: &mut AppState, worker: &WorkerHandle) {
    if let Err(e) = state.options.validate() {
        log::error!("{}", e);
        state.status = format!("Error: {e}");
        return;
    }
    if !state.begin_conversion() {
        return;
    }

    log::info!(
        "Converting {} image(s) to {}",
        state.selection.len(),
        state.options.output_path().display()
    );
    let sent = worker.send(ConvertCommand::Convert {
        images: state.selection.images().to_vec(),
        options: state.options.clone(),
    });
    if !sent {
        state.converting = false;
        state.status = crate::state::FAILED_STATUS.to_string();
        log::error!("Worker is not running");
    }
}
