//! Row rendering for the members table.

use egui::Ui;
use roster_business::{Member, MemberField, MembersTable};

use super::RowAction;
use super::cells::{render_action_cell, render_edit_cell, render_select_cell, render_text_cell};

/// Renders one member row and ends the grid row.
///
/// A row in edit mode shows inputs seeded with its pending values.
pub fn render_member_row(table: &MembersTable, member: &Member, ui: &mut Ui) -> Vec<RowAction> {
    let id = member.id;
    let editing = table.is_editing(id);
    let mut actions = Vec::new();

    if render_select_cell(ui, table.is_selected(id)) {
        actions.push(RowAction::ToggleSelect(id));
    }

    for field in MemberField::ALL {
        if editing {
            if let Some(value) = render_edit_cell(ui, id, field, table.edit_value(id, field)) {
                actions.push(RowAction::EditField { id, field, value });
            }
        } else {
            render_text_cell(ui, member.field(field));
        }
    }

    actions.extend(render_action_cell(ui, id, editing));
    ui.end_row();

    actions
}
