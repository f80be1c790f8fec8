//! Color theme constants.

use ratatui::style::Color;

/// Border color for unfocused blocks
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for focus and highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints, image references and placeholders
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of the selected result row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 40);

/// Step numbers on the instructions tab
pub const COLOR_STEP_NUMBER: Color = Color::Rgb(255, 111, 0); // orange #FF6F00

/// Recipe title on the overview tab
pub const COLOR_TITLE: Color = Color::LightYellow;
