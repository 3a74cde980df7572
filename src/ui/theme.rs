//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(38, 41, 48);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 96, 110);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(90, 170, 255);
pub const MARK_O: Color32 = Color32::from_rgb(255, 120, 110);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(120, 120, 120, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const CURRENT_MOVE_BG: Color32 = Color32::from_rgb(60, 80, 120);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Toast colors
pub const TOAST_ERROR_BG: Color32 = Color32::from_rgb(110, 40, 40);
pub const TOAST_INFO_BG: Color32 = Color32::from_rgb(40, 70, 110);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
