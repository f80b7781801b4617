pub mod members;

pub use members::members_panel;
