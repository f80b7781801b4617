//! Table components for the members panel.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: Column labels and widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type
//!
//! Rendering only reads the table. Clicks and edits come back as
//! [`RowAction`]s, applied once the grid is drawn.

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Frame, Grid, Margin, Stroke, Ui};
use roster_business::{MemberField, MemberId, MembersTable};

use crate::utils::colors::TABLE_BORDER_COLOR;

use self::columns::{COLUMN_COUNT, MIN_COLUMN_WIDTH};
use self::header::render_table_header;
use self::row::render_member_row;

/// Something the user did to a row during this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    ToggleSelect(MemberId),
    BeginEdit(MemberId),
    EditField {
        id: MemberId,
        field: MemberField,
        value: String,
    },
    SaveEdit(MemberId),
    CancelEdit(MemberId),
    Delete(MemberId),
}

impl RowAction {
    pub fn apply(self, table: &mut MembersTable) {
        match self {
            Self::ToggleSelect(id) => table.toggle_select(id),
            Self::BeginEdit(id) => table.begin_edit(id),
            Self::EditField { id, field, value } => table.update_edit_field(id, field, value),
            Self::SaveEdit(id) => table.save_edit(id),
            Self::CancelEdit(id) => table.cancel_edit(id),
            Self::Delete(id) => {
                table.delete_row(id);
            }
        }
    }
}

/// Renders the rows of the current page and returns what the user did.
pub fn render_members_table(table: &MembersTable, ui: &mut Ui) -> Vec<RowAction> {
    let mut actions = Vec::new();

    // Grid row 0 is the header.
    let selected_rows: Vec<usize> = table
        .current_items()
        .iter()
        .enumerate()
        .filter(|(_, member)| table.is_selected(member.id))
        .map(|(index, _)| index + 1)
        .collect();

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::same(4))
        .show(ui, |ui| {
            Grid::new("members_table")
                .num_columns(COLUMN_COUNT)
                .spacing([16.0, 6.0])
                .min_col_width(MIN_COLUMN_WIDTH)
                .with_row_color(move |row, style| {
                    selected_rows
                        .contains(&row)
                        .then(|| style.visuals.selection.bg_fill.gamma_multiply(0.35))
                })
                .show(ui, |ui| {
                    render_table_header(ui);

                    for member in table.current_items() {
                        actions.extend(render_member_row(table, member, ui));
                    }
                });

            if table.current_items().is_empty() {
                ui.add_space(8.0);
                ui.weak("No members to show.");
            }
        });

    actions
}
