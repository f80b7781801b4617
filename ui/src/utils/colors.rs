//! Shared color constants for the UI.

use egui::Color32;

/// Red color for error/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Border color for the members table (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
