//! Main panel for members management.

use egui::{Response, Ui};
use roster_business::{MembersFetchState, MembersTable};
use roster_states::StateCtx;

use super::alert::show_alert;
use super::pagination::render_pagination;
use super::table::render_members_table;
use super::toolbar::render_toolbar;
use crate::utils::colors::COLOR_RED;

/// Displays the members panel: toolbar, table, footer and any advisory.
///
/// Needs `MembersTable` and `MembersFetchState` registered in `state_ctx`.
pub fn members_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        render_toolbar(state_ctx.state_mut::<MembersTable>(), ui);
        render_fetch_status(state_ctx.state::<MembersFetchState>(), ui);

        ui.add_space(8.0);

        // Collect actions first, the table is only borrowed for reading while drawing
        let actions = render_members_table(state_ctx.state::<MembersTable>(), ui);
        let table = state_ctx.state_mut::<MembersTable>();
        for action in actions {
            action.apply(table);
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(table.selection_label());
            ui.separator();
            render_pagination(table, ui);
        });
    });

    show_alert(state_ctx.state_mut::<MembersTable>(), ui);

    response.response
}

fn render_fetch_status(fetch: &MembersFetchState, ui: &mut Ui) {
    match fetch {
        MembersFetchState::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading members...");
            });
        }
        MembersFetchState::Failed(err) => {
            ui.colored_label(COLOR_RED, format!("Error: {err}"));
        }
        MembersFetchState::Idle | MembersFetchState::Loaded { .. } => {}
    }
}
