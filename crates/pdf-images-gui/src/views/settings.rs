use eframe::egui;
use pdf_images::{PageSize, Placement};

use crate::state::AppState;
use crate::ui_components::radio_group;

pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new("⚙ PDF Settings")
        .default_open(true)
        .show(ui, |ui| {
            ui.add_enabled_ui(!state.converting, |ui| {
                ui.horizontal(|ui| {
                    ui.label("PDF name:");
                    ui.text_edit_singleline(&mut state.options.output_name);
                });
                ui.label(
                    egui::RichText::new(format!(
                        "Saves to {}",
                        state.options.output_path().display()
                    ))
                    .small()
                    .weak(),
                );

                ui.add_space(5.0);
                show_page_size_selector(ui, &mut state.options.page_size);

                ui.add_space(5.0);
                show_placement_selector(ui, &mut state.options.placement);
            });
        });
}

fn show_page_size_selector(ui: &mut egui::Ui, page_size: &mut PageSize) -> bool {
    let options: Vec<(PageSize, &str)> = PageSize::ALL
        .iter()
        .map(|size| (*size, size.description()))
        .collect();

    radio_group(ui, "Page size:", page_size, &options)
}

fn show_placement_selector(ui: &mut egui::Ui, placement: &mut Placement) -> bool {
    let options: Vec<(Placement, &str)> = Placement::ALL
        .iter()
        .map(|placement| (*placement, placement.label()))
        .collect();

    radio_group(ui, "Image placement:", placement, &options)
}
