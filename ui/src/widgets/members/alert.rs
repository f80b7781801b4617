//! Advisory window for messages raised by the members table.

use egui::{Align2, Ui, Window};
use roster_business::MembersTable;

/// Shows the table's pending advisory, if any, until the user dismisses it.
pub fn show_alert(table: &mut MembersTable, ui: &mut Ui) {
    let Some(message) = table.alert().map(str::to_owned) else {
        return;
    };

    let mut open = true;
    let mut dismissed = false;

    Window::new("Alert")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed || !open {
        table.dismiss_alert();
    }
}
