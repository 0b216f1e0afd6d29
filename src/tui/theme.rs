//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::scoring::Band;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;

pub const SECTION_COLOR: Color = Color::Cyan;
pub const REQUIRED_MARK: Color = Color::Red;
pub const PLACEHOLDER: Color = Color::DarkGray;
/// The auto-computed utilization field renders differently so it reads as
/// output, not input.
pub const DERIVED_COLOR: Color = Color::LightBlue;
pub const UNIT_COLOR: Color = Color::DarkGray;

pub const ROW_ALT_BG: Color = Color::Indexed(235);
pub const ROW_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;

pub const POPUP_BORDER: Color = Color::Cyan;

/// Terminal color for a performance band's color token.
pub fn band_color(band: Band) -> Color {
    match band {
        Band::VeryGood => Color::Green,
        Band::Good => Color::Yellow,
        Band::Moderate => Color::LightRed,
        Band::Low => Color::Red,
    }
}
