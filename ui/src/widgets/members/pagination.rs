//! Page navigation below the members table.

use egui::{Button, Ui};
use roster_business::MembersTable;

/// Renders First/Prev, the page window, Next/Last and the page label.
///
/// Buttons that would not move are disabled.
pub fn render_pagination(table: &mut MembersTable, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let current = table.current_page();
        let total = table.total_pages();
        let at_start = current <= 1;
        let at_end = current >= total;

        if ui.add_enabled(!at_start, Button::new("« First")).clicked() {
            table.first_page();
        }
        if ui.add_enabled(!at_start, Button::new("‹ Prev")).clicked() {
            table.prev_page();
        }

        for page in table.page_window() {
            if ui
                .selectable_label(page == current, page.to_string())
                .clicked()
            {
                table.go_to_page(page);
            }
        }

        if ui.add_enabled(!at_end, Button::new("Next ›")).clicked() {
            table.next_page();
        }
        if ui.add_enabled(!at_end, Button::new("Last »")).clicked() {
            table.last_page();
        }

        ui.separator();
        ui.label(table.page_label());
    });
}
