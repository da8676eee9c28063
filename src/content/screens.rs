//! Welcome and exit screens.

use crate::content::profile;
use crate::render::frames::{self, FRAME_WIDTH};
use crate::render::{styled, Theme};
use ratatui::text::{Line, Span, Text};

const BANNER: [&str; 6] = [
    "██████╗  ██████╗ ██████╗ ████████╗███████╗ ██████╗ ██╗     ██╗ ██████╗",
    "██╔══██╗██╔═══██╗██╔══██╗╚══██╔══╝██╔════╝██╔═══██╗██║     ██║██╔═══██╗",
    "██████╔╝██║   ██║██████╔╝   ██║   █████╗  ██║   ██║██║     ██║██║   ██║",
    "██╔═══╝ ██║   ██║██╔══██╗   ██║   ██╔══╝  ██║   ██║██║     ██║██║   ██║",
    "██║     ╚██████╔╝██║  ██║   ██║   ██║     ╚██████╔╝███████╗██║╚██████╔╝",
    "╚═╝      ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝      ╚═════╝ ╚══════╝╚═╝ ╚═════╝",
];

pub const WELCOME_TITLE: &str = "WELCOME TO MY INTERACTIVE PORTFOLIO";

pub fn banner(theme: &Theme) -> Text<'static> {
    let mut lines = vec![Line::default()];
    lines.extend(
        BANNER
            .iter()
            .map(|row| styled(format!("    {}", row), theme.accent)),
    );
    lines.push(Line::default());
    Text::from(lines)
}

/// Banner, boxed title and greeting shown before the feature list
pub fn welcome_intro(theme: &Theme) -> Text<'static> {
    let mut lines = banner(theme).lines;
    lines.extend(frames::section_header(WELCOME_TITLE, theme).lines);
    lines.push(styled(
        format!("👋 Hello! I'm {}", profile::NAME),
        theme.emphasis,
    ));
    lines.push(styled(profile::TAGLINE, theme.item));
    lines.push(Line::default());
    Text::from(lines)
}

/// Feature list revealed with the typewriter effect; `sections` is the number of
/// selectable sections in the main menu.
pub fn welcome_features(sections: usize, theme: &Theme) -> Text<'static> {
    Text::from(vec![
        styled("🌟 Interactive Portfolio Features:", theme.accent),
        Line::from("  • Navigate with arrow keys (↑/↓) or vim keys (j/k)"),
        Line::from(format!(
            "  • Use number keys (1-{}) for direct section access",
            sections
        )),
        Line::from("  • Press 'h' anytime for help, 'q' to quit, 'm' for menu"),
        Line::from("  • Comprehensive error handling and input validation"),
        Line::from("  • Smooth transitions between sections"),
        Line::default(),
        Line::from(vec![
            Span::styled("💡 Pro Tip:", theme.warning),
            Span::raw(" This portfolio demonstrates both my technical skills"),
        ]),
        Line::from("and attention to user experience design!"),
        Line::default(),
    ])
}

pub fn welcome_prompt(theme: &Theme) -> Text<'static> {
    Text::from(vec![
        styled("Ready to explore? Let's get started!", theme.header),
        styled("Press any key to continue to the main menu...", theme.accent),
    ])
}

/// Thank-you box with the contact reminder
pub fn exit_screen(theme: &Theme) -> Text<'static> {
    let message = "Thanks for visiting my portfolio!";
    let inner = FRAME_WIDTH - 6;
    let left = (inner - message.chars().count()) / 2;
    let right = inner - message.chars().count() - left;

    Text::from(vec![
        Line::default(),
        styled(format!("    ╔{}╗", "═".repeat(inner)), theme.accent),
        styled(
            format!("    ║{}{}{}║", " ".repeat(left), message, " ".repeat(right)),
            theme.accent,
        ),
        styled(format!("    ╚{}╝", "═".repeat(inner)), theme.accent),
        Line::default(),
        styled(
            format!("{} - {}", profile::NAME, profile::ROLE),
            theme.emphasis,
        ),
        styled(
            format!("Feel free to reach out anytime: {}", profile::EMAIL),
            theme.item,
        ),
        styled(
            format!(
                "GitHub: {} | LinkedIn: {}",
                profile::GITHUB,
                profile::LINKEDIN
            ),
            theme.accent,
        ),
        Line::default(),
        Line::from(vec![
            Span::styled("💼 Remember:", theme.warning),
            Span::raw(
                " Great code is just the beginning - let's build something amazing together!",
            ),
        ]),
        styled("Have a fantastic day! 👋", theme.header),
        Line::default(),
    ])
}
