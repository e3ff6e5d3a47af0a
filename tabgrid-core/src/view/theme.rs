//! src/view/theme.rs
//! ============================================================================
//! # Nord Theme Color Palette
//!
//! Color constants for the grid chrome, from the Nord specification:
//! https://www.nordtheme.com/docs/colors-and-palettes

use ratatui::style::{Color, Modifier, Style};

use crate::model::column::HeaderStyle;

pub const BACKGROUND: Color = Color::Rgb(46, 52, 64); // nord0
pub const SURFACE: Color = Color::Rgb(59, 66, 82); // nord1
pub const SURFACE_LIGHT: Color = Color::Rgb(67, 76, 94); // nord2
pub const COMMENT: Color = Color::Rgb(76, 86, 106); // nord3
pub const FOREGROUND: Color = Color::Rgb(216, 222, 233); // nord4
pub const BRIGHT: Color = Color::Rgb(236, 239, 244); // nord6
pub const CYAN: Color = Color::Rgb(136, 192, 208); // nord8
pub const BLUE: Color = Color::Rgb(129, 161, 193); // nord9
pub const PRIMARY: Color = Color::Rgb(94, 129, 172); // nord10
pub const RED: Color = Color::Rgb(191, 97, 106); // nord11
pub const ORANGE: Color = Color::Rgb(208, 135, 112); // nord12
pub const YELLOW: Color = Color::Rgb(235, 203, 139); // nord13
pub const GREEN: Color = Color::Rgb(163, 190, 140); // nord14

pub fn base_style() -> Style {
    Style::default().fg(FOREGROUND).bg(BACKGROUND)
}

/// Header row style per preset.
pub fn header_style(preset: HeaderStyle) -> Style {
    match preset {
        HeaderStyle::Light => Style::default()
            .fg(BACKGROUND)
            .bg(BRIGHT)
            .add_modifier(Modifier::BOLD),
        HeaderStyle::Dark => Style::default()
            .fg(YELLOW)
            .bg(SURFACE)
            .add_modifier(Modifier::BOLD),
        HeaderStyle::Primary => Style::default()
            .fg(BRIGHT)
            .bg(PRIMARY)
            .add_modifier(Modifier::BOLD),
    }
}

/// Background of odd rows when the striped option is on.
pub fn stripe_style() -> Style {
    Style::default().bg(SURFACE)
}

/// Cursor row highlight.
pub fn highlight_style() -> Style {
    Style::default().bg(SURFACE_LIGHT).add_modifier(Modifier::BOLD)
}

/// Checked rows.
pub fn selected_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn border_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn title_style() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::BOLD)
}

pub fn empty_text_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::ITALIC)
}

pub fn hint_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn busy_style() -> Style {
    Style::default().fg(ORANGE)
}
