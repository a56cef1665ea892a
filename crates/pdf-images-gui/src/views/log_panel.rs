use eframe::egui;

use crate::logger::AppLogger;

pub fn show(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.strong(format!("Log ({})", logger.len()));
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    });

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for entry in logger.entries() {
                let color = match entry.level {
                    log::Level::Error => egui::Color32::LIGHT_RED,
                    log::Level::Warn => egui::Color32::YELLOW,
                    _ => ui.visuals().text_color(),
                };
                ui.label(
                    egui::RichText::new(entry.display_line())
                        .monospace()
                        .color(color),
                );
            }
        });
}
