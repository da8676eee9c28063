//! Frame builders for the navigation chrome.
//!
//! Each function returns a ratatui `Text` so frames can be inspected in tests before they are
//! written out.

use crate::input::RawKey;
use crate::menu::{MenuItem, MenuState};
use crate::render::canvas::styled;
use crate::render::Theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

/// Width of headers, rules and the section footer
pub const FRAME_WIDTH: usize = 80;
/// Width of the help overlay and error screen rules
const OVERLAY_WIDTH: usize = 60;

pub fn rule(fill: char, width: usize, style: Style) -> Line<'static> {
    styled(fill.to_string().repeat(width), style)
}

/// Title centered in a double-line box, followed by a blank line
pub fn section_header(title: &str, theme: &Theme) -> Text<'static> {
    let inner = FRAME_WIDTH - 2;
    let title_width = title.chars().count().min(inner);
    let left = (inner - title_width) / 2;
    let right = inner - title_width - left;
    let middle = format!("║{}{}{}║", " ".repeat(left), title, " ".repeat(right));

    Text::from(vec![
        rule('═', FRAME_WIDTH, theme.border),
        styled(middle, theme.header),
        rule('═', FRAME_WIDTH, theme.border),
        Line::default(),
    ])
}

/// Key shown next to an item: its 1-based number, or `q` for a trailing exit entry
pub fn item_key(index: usize, len: usize, item: &MenuItem) -> String {
    if item.is_exit() && index + 1 == len {
        "q".to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Full menu frame: header, instructions and every item with the selection highlighted
pub fn menu_frame(title: &str, state: &MenuState<'_>, theme: &Theme) -> Text<'static> {
    let mut lines = section_header(title, theme).lines;

    lines.push(styled("Navigation Options:", theme.emphasis));
    lines.push(instruction("Arrow Keys:", "↑/↓ or j/k (vim-style)", theme));
    lines.push(instruction(
        "Number Keys:",
        &format!("1-{} to select directly", state.len()),
        theme,
    ));
    lines.push(instruction(
        "Actions:",
        "Enter to confirm, 'q'/ESC to quit, 'm' for menu",
        theme,
    ));
    lines.push(Line::default());

    for (index, item) in state.items().iter().enumerate() {
        let key = item_key(index, state.len(), item);
        if index == state.selected_index() {
            lines.push(styled(
                format!("  ► [{}] {} {}", key, item.icon(), item.label()),
                theme.selected,
            ));
            lines.push(styled(format!("    {}", item.description()), theme.accent));
        } else {
            lines.push(styled(
                format!("    [{}] {} {}", key, item.icon(), item.label()),
                theme.item,
            ));
            lines.push(styled(
                format!("    {}", item.description()),
                theme.description,
            ));
        }
        lines.push(Line::default());
    }

    Text::from(lines)
}

fn instruction(key: &str, text: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  • {}", key), theme.item),
        Span::raw(format!(" {}", text)),
    ])
}

/// Static key reference for a menu of `menu_size` entries
pub fn help_overlay(menu_size: usize, theme: &Theme) -> Text<'static> {
    let selectable = menu_size.saturating_sub(1).max(1);
    let bindings = [
        (
            "Arrow Keys",
            "↑/↓ - Navigate up and down through menu items".to_string(),
        ),
        (
            "Vim Keys",
            "j/k - Navigate down/up (vim-style navigation)".to_string(),
        ),
        (
            "Number Keys",
            format!("1-{} - Jump directly to menu item by number", selectable),
        ),
        (
            "Enter",
            "Confirm selection and enter chosen section".to_string(),
        ),
        (
            "'q' or ESC",
            "Quit application or return to previous menu".to_string(),
        ),
        ("'m'", "Return to main menu from any section".to_string()),
        ("'h'", "Show this help information".to_string()),
        ("Ctrl+C", "Emergency exit (works anywhere)".to_string()),
    ];

    let mut lines = vec![
        Line::default(),
        rule('═', OVERLAY_WIDTH, theme.header),
        styled("📚 NAVIGATION HELP", theme.emphasis),
        rule('═', OVERLAY_WIDTH, theme.header),
    ];

    for (command, description) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", command), theme.item),
            Span::raw(format!(" - {}", description)),
        ]));
    }

    lines.push(Line::default());
    lines.push(styled(
        "💡 Tip: Most sections have a 'back to menu' option at the bottom",
        theme.warning,
    ));
    lines.push(rule('═', OVERLAY_WIDTH, theme.header));
    lines.push(styled("Press any key to continue...", theme.accent));

    Text::from(lines)
}

/// Warning shown under the menu for an unrecognized key
pub fn invalid_key_warning(key: &RawKey, theme: &Theme) -> Text<'static> {
    Text::from(vec![
        Line::default(),
        styled(
            format!("⚠ Invalid input: '{}'. Press 'h' for help.", key),
            theme.warning,
        ),
    ])
}

/// Warning shown under a section footer for an unrecognized key
pub fn section_invalid_warning(key: &RawKey, theme: &Theme) -> Text<'static> {
    Text::from(vec![
        Line::default(),
        styled(
            format!(
                "⚠ Invalid input: '{}'. Try again or press 'h' for help.",
                key
            ),
            theme.warning,
        ),
    ])
}

/// Navigation footer printed under every section
pub fn section_footer(theme: &Theme) -> Text<'static> {
    let option = |key: &str, text: &str| {
        Line::from(vec![
            Span::styled(format!("  {}", key), theme.item),
            Span::raw(format!(" - {}", text)),
        ])
    };

    Text::from(vec![
        Line::default(),
        rule('═', FRAME_WIDTH, theme.border),
        styled("🔄 Navigation Options:", theme.emphasis),
        option("[Enter/Space]", "Return to Main Menu"),
        option("['m']", "Jump to Main Menu"),
        option("['h']", "Show Help"),
        option("['q'/ESC]", "Quit Portfolio"),
        rule('═', FRAME_WIDTH, theme.border),
    ])
}

/// Prompt written without a newline after the footer
pub fn footer_prompt(theme: &Theme) -> Line<'static> {
    styled("Choose your action: ", theme.warning)
}

/// Report for a fault caught at the top level, with the recovery options
pub fn error_screen(message: &str, theme: &Theme) -> Text<'static> {
    Text::from(vec![
        rule('═', OVERLAY_WIDTH, theme.error),
        styled("🚨 An unexpected error occurred:", theme.error),
        rule('═', OVERLAY_WIDTH, theme.error),
        styled(format!("Error Details: {}", message), theme.warning),
        Line::default(),
        styled(
            "Don't worry! This doesn't affect the core functionality.",
            theme.accent,
        ),
        styled("Options:", theme.item),
        Line::from("  • Press 'Enter' to return to the main menu"),
        Line::from("  • Press 'q' to quit safely"),
        Line::from("  • Press 'h' for help"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;
    use crate::render::canvas::plain_text;

    fn noop(_canvas: &mut crate::render::Canvas<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn sample_menu() -> Menu {
        Menu::new(
            "PORTFOLIO NAVIGATION",
            vec![
                MenuItem::section("👋", "Introduction", "Welcome & Bio", noop),
                MenuItem::section("📋", "Resume", "Skills & Experience", noop),
                MenuItem::exit("❌", "Exit", "Quit Portfolio"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn header_is_centered_in_frame_width() {
        let text = plain_text(&section_header("MAIN MENU", &Theme::plain()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].chars().count(), FRAME_WIDTH);
        assert_eq!(lines[1].chars().count(), FRAME_WIDTH);
        assert!(lines[1].starts_with('║') && lines[1].ends_with('║'));
        assert!(lines[1].contains("MAIN MENU"));
    }

    #[test]
    fn menu_frame_marks_only_the_selected_item() {
        let menu = sample_menu();
        let mut state = MenuState::new(&menu);
        state.move_down();

        let text = plain_text(&menu_frame(menu.title(), &state, &Theme::plain()));
        assert!(text.contains("PORTFOLIO NAVIGATION"));
        assert!(text.contains("► [2] 📋 Resume"));
        assert!(text.contains("    [1] 👋 Introduction"));
        assert_eq!(text.matches('►').count(), 1);
    }

    #[test]
    fn trailing_exit_item_is_keyed_q() {
        let menu = sample_menu();
        let state = MenuState::new(&menu);
        let text = plain_text(&menu_frame(menu.title(), &state, &Theme::plain()));

        assert!(text.contains("[q] ❌ Exit"));
        assert!(text.contains("1-3 to select directly"));
    }

    #[test]
    fn help_overlay_lists_selectable_range() {
        let text = plain_text(&help_overlay(6, &Theme::plain()));
        assert!(text.contains("NAVIGATION HELP"));
        assert!(text.contains("1-5 - Jump directly"));
        assert!(text.contains("Ctrl+C"));
        assert!(text.trim_end().ends_with("Press any key to continue..."));
    }

    #[test]
    fn warnings_show_the_offending_key() {
        let theme = Theme::plain();
        let menu_warning = plain_text(&invalid_key_warning(&RawKey::Char('x'), &theme));
        assert!(menu_warning.contains("Invalid input: 'x'. Press 'h' for help."));

        let section_warning = plain_text(&section_invalid_warning(&RawKey::Left, &theme));
        assert!(section_warning.contains("Invalid input: 'LEFT'. Try again"));
    }

    #[test]
    fn error_screen_includes_details_and_options() {
        let text = plain_text(&error_screen("renderer exploded", &Theme::plain()));
        assert!(text.contains("Error Details: renderer exploded"));
        assert!(text.contains("Press 'q' to quit safely"));
    }
}
