//! Table header rendering for the members table.

use egui::Ui;

use super::columns::column_labels;

/// Renders the header row with bold labels.
pub fn render_table_header(ui: &mut Ui) {
    for label in column_labels() {
        ui.strong(label);
    }
    ui.end_row();
}
