use eframe::egui;

/// Vertical radio group for enum selection
pub fn radio_group<T>(ui: &mut egui::Ui, label: &str, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.label(label);
    ui.indent(label, |ui| {
        for (option_value, option_text) in options {
            if ui
                .radio_value(value, option_value.clone(), *option_text)
                .changed()
            {
                changed = true;
            }
        }
    });
    changed
}

/// What the user did to a row of the image list this frame
pub enum RowAction {
    Click { toggle: bool, extend: bool },
    Open,
    MoveUp,
    MoveDown,
}

/// Image list with multi-select, reordering and open-on-double-click
pub struct ImageListEditor<'a> {
    names: &'a [String],
    is_selected: &'a dyn Fn(usize) -> bool,
}

impl<'a> ImageListEditor<'a> {
    pub fn new(names: &'a [String], is_selected: &'a dyn Fn(usize) -> bool) -> Self {
        Self { names, is_selected }
    }

    /// Draw the list and report at most one row action
    pub fn show(self, ui: &mut egui::Ui) -> Option<(usize, RowAction)> {
        if self.names.is_empty() {
            ui.label("No images selected");
            return None;
        }

        let mut action = None;

        for (idx, name) in self.names.iter().enumerate() {
            ui.horizontal(|ui| {
                if idx > 0 && ui.small_button("▲").clicked() {
                    action = Some((idx, RowAction::MoveUp));
                }
                if idx < self.names.len() - 1 && ui.small_button("▼").clicked() {
                    action = Some((idx, RowAction::MoveDown));
                }

                let response =
                    ui.selectable_label((self.is_selected)(idx), format!("{}. {}", idx + 1, name));

                if response.double_clicked() {
                    action = Some((idx, RowAction::Open));
                } else if response.clicked() {
                    let modifiers = ui.input(|i| i.modifiers);
                    action = Some((
                        idx,
                        RowAction::Click {
                            toggle: modifiers.command,
                            extend: modifiers.shift,
                        },
                    ));
                }
            });
        }

        action
    }
}
