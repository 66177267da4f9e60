//! Color theme constants for the storefront UI.

use ratatui::style::Color;

/// Card and dialog borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Borders of the selected or hovered card
pub const COLOR_ACCENT: Color = Color::White;

/// Titles and the active header tab
pub const COLOR_HEADER: Color = Color::White;

/// Buy controls and prices
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Image links, hints, placeholders
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of a control under the pointer
pub const COLOR_HOVER_BG: Color = Color::DarkGray;
