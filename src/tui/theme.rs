//! Central theme configuration for the TUI.
//!
//! All colors are defined here to keep the map, panels and modals
//! consistent.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    // Map
    pub map_outline: Color,
    pub pin: Color,
    pub pin_selected: Color,
    pub cursor: Color,

    // Popup panel
    pub popup_title: Color,
    pub popup_date: Color,
    pub popup_photo: Color,
    pub popup_delete: Color,

    // Modal colors
    pub modal_border: Color,
    pub modal_border_delete: Color,
    pub modal_border_create: Color,
    pub modal_cursor: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_form: (Color, Color),
    pub mode_delete: (Color, Color),

    // Messages
    pub message: Color,
    pub error: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Monokai color scheme
        Self {
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),
            text_highlight: Color::Rgb(248, 248, 242),

            map_outline: Color::Rgb(102, 217, 239),
            pin: Color::Rgb(249, 38, 114),
            pin_selected: Color::Rgb(230, 219, 116),
            cursor: Color::Rgb(166, 226, 46),

            popup_title: Color::Rgb(248, 248, 242),
            popup_date: Color::Rgb(230, 219, 116),
            popup_photo: Color::Rgb(174, 129, 255),
            popup_delete: Color::Rgb(249, 38, 114),

            modal_border: Color::Rgb(102, 217, 239),
            modal_border_delete: Color::Rgb(249, 38, 114),
            modal_border_create: Color::Rgb(166, 226, 46),
            modal_cursor: Color::Rgb(166, 226, 46),

            mode_normal: (Color::Rgb(102, 217, 239), Color::Black),
            mode_form: (Color::Rgb(166, 226, 46), Color::Black),
            mode_delete: (Color::Rgb(249, 38, 114), Color::Black),

            message: Color::Rgb(230, 219, 116),
            error: Color::Rgb(249, 38, 114),

            help_key: Color::Rgb(253, 151, 31),
            help_border: Color::Rgb(102, 217, 239),
        }
    }
}

impl Theme {
    pub fn pin_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.pin_selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.pin)
        }
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
