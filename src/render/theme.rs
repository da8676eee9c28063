//! Color theme and styling definitions using ratatui styles
//!
//! Frames are built from ratatui `Text`, so the theme is a plain value of `Style`s that the
//! frame builders read. Nothing here is process-wide or mutable.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every kind of text the menus and sections print
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Section and menu titles
    pub header: Style,

    /// Horizontal rules and box borders
    pub border: Style,

    /// Secondary highlights, hints and descriptions of the selected item
    pub accent: Style,

    /// Currently selected menu entry
    pub selected: Style,

    /// Unselected menu entries and key names in instructions
    pub item: Style,

    /// Descriptions under unselected entries
    pub description: Style,

    /// Transient warnings and tips
    pub warning: Style,

    /// Error reports
    pub error: Style,

    /// Informational values (dates, stats)
    pub info: Style,

    /// Bold body text
    pub emphasis: Style,
}

impl Default for Theme {
    /// Colored theme matching a standard 16-color terminal palette
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Cyan),
            accent: Style::default().fg(Color::LightCyan),
            selected: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            item: Style::default().fg(Color::LightGreen),
            description: Style::default().fg(Color::White),
            warning: Style::default().fg(Color::LightYellow),
            error: Style::default().fg(Color::LightRed),
            info: Style::default().fg(Color::LightBlue),
            emphasis: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Theme that emits no escape codes at all, for pipes and `color = false`
    pub fn plain() -> Self {
        Self {
            header: Style::default(),
            border: Style::default(),
            accent: Style::default(),
            selected: Style::default(),
            item: Style::default(),
            description: Style::default(),
            warning: Style::default(),
            error: Style::default(),
            info: Style::default(),
            emphasis: Style::default(),
        }
    }

    /// Pick the colored or plain theme
    pub fn for_color(color: bool) -> Self {
        if color {
            Self::default()
        } else {
            Self::plain()
        }
    }
}
