// Theme for the TUI
//
// Two palettes, picked by the `theme` config key.

use crate::config::ThemeChoice;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Colors for every element the viewer draws
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Chrome
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Selection and jump targets
    pub selected_marker: Color,
    pub selected_bg: Color,
    pub target_bg: Color,

    // Record fields
    pub quote: Color,
    pub author: Color,
    pub date: Color,
    pub category: Color,
    pub link: Color,
    pub link_focused: Color,

    // Diagnostics
    pub warn: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Cyan,

            selected_marker: Color::Cyan,
            selected_bg: Color::Rgb(30, 34, 42),
            target_bg: Color::Rgb(70, 60, 20),

            quote: Color::White,
            author: Color::LightBlue,
            date: Color::Gray,
            category: Color::Magenta,
            link: Color::LightCyan,
            link_focused: Color::Yellow,

            warn: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Rounded,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            highlight: Color::Blue,

            selected_marker: Color::Blue,
            selected_bg: Color::Rgb(232, 238, 247),
            target_bg: Color::Rgb(255, 243, 176),

            quote: Color::Black,
            author: Color::Blue,
            date: Color::DarkGray,
            category: Color::Magenta,
            link: Color::Blue,
            link_focused: Color::Rgb(184, 134, 11),

            warn: Color::Rgb(184, 134, 11),
            error: Color::Red,
        }
    }

    pub fn link_style(&self, focused: bool) -> Style {
        let color = if focused { self.link_focused } else { self.link };
        let style = Style::default().fg(color).add_modifier(Modifier::UNDERLINED);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
