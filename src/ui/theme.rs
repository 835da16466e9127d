//! Color palette.

use ratatui::style::Color;

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights: selected rows, the active tab, the current page.
pub const COLOR_ACCENT: Color = Color::Rgb(64, 196, 200);

pub const COLOR_HEADER: Color = Color::White;

pub const COLOR_DIM: Color = Color::DarkGray;

/// Prices and discounts.
pub const COLOR_PRICE: Color = Color::Rgb(240, 200, 100);

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_WARNING: Color = Color::Yellow;

pub const COLOR_ERROR: Color = Color::Red;

/// Background of the highlighted row.
pub const COLOR_SELECTED_BG: Color = Color::Rgb(20, 40, 50);
