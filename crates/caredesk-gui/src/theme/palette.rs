//! Light and dark palettes.

use iced::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

/// The resolved colors for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeskPalette {
    pub background: Color,
    /// Cards, table headers, sidebar.
    pub surface: Color,
    /// Zebra stripes, hover states.
    pub surface_alt: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

pub const LIGHT: DeskPalette = DeskPalette {
    background: rgb(0xF8, 0xFA, 0xFC),
    surface: rgb(0xFF, 0xFF, 0xFF),
    surface_alt: rgb(0xF1, 0xF5, 0xF9),
    border: rgb(0xE2, 0xE8, 0xF0),
    text_primary: rgb(0x0F, 0x17, 0x2A),
    text_secondary: rgb(0x33, 0x41, 0x55),
    text_muted: rgb(0x64, 0x74, 0x8B),
    text_disabled: rgb(0xCB, 0xD5, 0xE1),
    accent: rgb(0x0D, 0x74, 0x90),
    on_accent: rgb(0xFF, 0xFF, 0xFF),
    success: rgb(0x16, 0x8A, 0x4B),
    warning: rgb(0xB4, 0x6A, 0x02),
    danger: rgb(0xC2, 0x2E, 0x2E),
    info: rgb(0x1D, 0x5B, 0xB8),
};

pub const DARK: DeskPalette = DeskPalette {
    background: rgb(0x0B, 0x12, 0x1C),
    surface: rgb(0x13, 0x1C, 0x29),
    surface_alt: rgb(0x1B, 0x26, 0x36),
    border: rgb(0x2A, 0x37, 0x4A),
    text_primary: rgb(0xED, 0xF2, 0xF7),
    text_secondary: rgb(0xC3, 0xCE, 0xDC),
    text_muted: rgb(0x8E, 0x9C, 0xB0),
    text_disabled: rgb(0x4A, 0x58, 0x6C),
    accent: rgb(0x3D, 0xB6, 0xD9),
    on_accent: rgb(0x06, 0x12, 0x1A),
    success: rgb(0x4A, 0xC8, 0x8A),
    warning: rgb(0xE3, 0xA8, 0x3B),
    danger: rgb(0xE8, 0x6A, 0x6A),
    info: rgb(0x6F, 0xA8, 0xF0),
};
