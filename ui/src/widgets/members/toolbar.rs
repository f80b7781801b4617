//! Search box and bulk actions above the members table.

use egui::{Align, Key, Layout, TextEdit, Ui};
use log::{info, warn};
use roster_business::MembersTable;

pub const SEARCH_HINT: &str = "Search by name, email, or role";

const SEARCH_WIDTH: f32 = 320.0;

/// Renders the toolbar row.
///
/// Searching happens on Enter or on the Search button, not per keystroke.
pub fn render_toolbar(table: &mut MembersTable, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let search = ui.add(
            TextEdit::singleline(table.search_term_mut())
                .hint_text(SEARCH_HINT)
                .desired_width(SEARCH_WIDTH),
        );
        let submitted = search.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button("Search").clicked() || submitted {
            table.apply_search();
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Delete Selected").clicked() {
                match table.delete_selected() {
                    Ok(removed) => info!("Delete Selected removed {removed} members"),
                    Err(err) => warn!("Delete Selected: {err}"),
                }
            }
        });
    });
}
