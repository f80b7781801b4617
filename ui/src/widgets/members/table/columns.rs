//! Column definitions for the members table.

use roster_business::MemberField;

/// Narrowest any column may get.
pub const MIN_COLUMN_WIDTH: f32 = 48.0;

/// Width of the inline edit inputs.
pub const EDIT_INPUT_WIDTH: f32 = 160.0;

pub const SELECT_LABEL: &str = "Select";
pub const ACTION_LABEL: &str = "Action";

/// Select, the member fields, Action.
pub const COLUMN_COUNT: usize = MemberField::ALL.len() + 2;

/// Header labels in column order.
pub fn column_labels() -> impl Iterator<Item = &'static str> {
    std::iter::once(SELECT_LABEL)
        .chain(MemberField::ALL.iter().map(|field| field.label()))
        .chain(std::iter::once(ACTION_LABEL))
}
