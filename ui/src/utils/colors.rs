//! Shared color constants for the UI.

use egui::Color32;

/// Border color for the Typora-like table style (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background for the Typora-like table style (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Background of checked rows.
pub const SELECTED_ROW_COLOR: Color32 = Color32::from_rgb(204, 204, 204);

/// Red used for destructive buttons.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
