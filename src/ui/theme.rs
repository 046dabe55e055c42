//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 230, 214);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 66, 60);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(200, 60, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 100, 190);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(240, 180, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Display color for a player's mark
pub fn mark_color(cell: crate::Cell) -> Color32 {
    match cell {
        crate::Cell::X => X_MARK,
        crate::Cell::O => O_MARK,
        crate::Cell::Empty => TEXT_MUTED,
    }
}
