//! Shared UI color constants.

use ratatui::style::Color;

use crate::search::{Highlight, Status};

pub const HEADER_BG: Color = Color::Rgb(20, 20, 20);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_SUCCESS: Color = Color::Green;
pub const ACCENT_WARNING: Color = Color::Yellow;
pub const ACCENT_ERROR: Color = Color::Red;

pub const TEXT_BRIGHT: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_MUTED: Color = Color::Rgb(130, 130, 130);
pub const TEXT_FAINT: Color = Color::Rgb(80, 80, 80);
pub const BORDER_DEFAULT: Color = Color::Rgb(70, 70, 70);

/// Bar color for each highlight class.
pub fn highlight_color(highlight: Highlight) -> Color {
    match highlight {
        Highlight::InRange => Color::Rgb(0, 0, 128),
        Highlight::Eliminated => Color::Rgb(128, 128, 128),
        Highlight::CurrentMid => Color::Yellow,
        Highlight::Found => Color::Green,
    }
}

pub fn status_color(status: Option<Status>) -> Color {
    match status {
        Some(Status::Found) => ACCENT_SUCCESS,
        Some(Status::NotFound) => ACCENT_ERROR,
        Some(Status::Searching) => ACCENT_PRIMARY,
        None => TEXT_MUTED,
    }
}
