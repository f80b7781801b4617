//! Cell rendering functions for the members table.

use egui::{TextEdit, Ui};
use roster_business::{MemberField, MemberId};

use super::RowAction;
use super::columns::EDIT_INPUT_WIDTH;

/// Renders the selection checkbox. Returns `true` if it was toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Renders an inline edit input showing `current`.
///
/// Returns the new text if the user changed it this frame.
#[inline]
pub fn render_edit_cell(
    ui: &mut Ui,
    id: MemberId,
    field: MemberField,
    current: &str,
) -> Option<String> {
    let mut value = current.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut value)
            .id_salt(("member_edit", id, field))
            .hint_text(field.label())
            .desired_width(EDIT_INPUT_WIDTH),
    );

    response.changed().then_some(value)
}

/// Renders Edit/Delete, or Save/Cancel while the row is being edited.
#[inline]
pub fn render_action_cell(ui: &mut Ui, id: MemberId, editing: bool) -> Option<RowAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if editing {
            if ui.button("Save").clicked() {
                action = Some(RowAction::SaveEdit(id));
            }
            if ui.button("Cancel").clicked() {
                action = Some(RowAction::CancelEdit(id));
            }
        } else {
            if ui.button("Edit").on_hover_text("Edit member").clicked() {
                action = Some(RowAction::BeginEdit(id));
            }
            if ui.button("Delete").on_hover_text("Delete member").clicked() {
                action = Some(RowAction::Delete(id));
            }
        }
    });

    action
}
