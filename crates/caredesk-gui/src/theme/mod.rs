//! Theme for CareDesk.
//!
//! The palette is explicit configuration resolved from the Iced [`Theme`]
//! each widget already receives; there is no ambient or global theme state.
//! Widgets look colors up through the [`DeskColors`] extension trait.

mod palette;
mod style;

pub use palette::{DARK, DeskPalette, LIGHT};
pub use style::{button_chip, button_ghost, button_primary, text_input_default};

use iced::Theme;

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 6.0;
pub const BORDER_RADIUS_MD: f32 = 10.0;

pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const TABLE_CELL_PADDING_X: f32 = 12.0;
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Build the application theme for the requested mode.
pub fn desk_theme(dark: bool) -> Theme {
    let desk = if dark { DARK } else { LIGHT };
    let palette = iced::theme::Palette {
        background: desk.background,
        text: desk.text_primary,
        primary: desk.accent,
        success: desk.success,
        danger: desk.danger,
        ..Theme::Light.palette()
    };
    let name = if dark { "CareDesk Dark" } else { "CareDesk Light" };
    Theme::custom(name.to_string(), palette)
}

/// Palette lookup from the theme every widget style closure receives.
pub trait DeskColors {
    /// The desk palette matching the theme's light/dark mode.
    fn desk(&self) -> DeskPalette;
}

impl DeskColors for Theme {
    fn desk(&self) -> DeskPalette {
        if self.extended_palette().is_dark {
            DARK
        } else {
            LIGHT
        }
    }
}
