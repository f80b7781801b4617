//! Members management module.
//!
//! This module contains the members panel widget and its submodules:
//! - `toolbar`: Search box and bulk delete button
//! - `table`: Table rendering components (columns, header, row, cells)
//! - `pagination`: Page navigation below the table
//! - `alert`: Advisory window raised by the table
//! - `panel`: Main panel widget tying them together

mod alert;
mod pagination;
mod panel;
pub mod table;
mod toolbar;

pub use panel::members_panel;
pub use table::RowAction;
