//! Portfolio content: section renderers, the main menu and the welcome/exit screens.
//!
//! Everything here only writes. Input handling stays in the navigation layer.

pub mod contact;
pub mod introduction;
pub mod profile;
pub mod projects;
pub mod resume;
pub mod screens;
pub mod utilities;

use crate::error::Result;
use crate::menu::{Menu, MenuItem};

pub const MAIN_MENU_TITLE: &str = "PORTFOLIO NAVIGATION";

/// The top-level menu: five sections followed by the exit entry
pub fn main_menu() -> Result<Menu> {
    Menu::new(
        MAIN_MENU_TITLE,
        vec![
            MenuItem::section(
                "👋",
                "Introduction",
                "Welcome & Bio - Get to know me and my background",
                introduction::render,
            ),
            MenuItem::section(
                "📋",
                "Resume",
                "Skills & Experience - Technical skills and professional journey",
                resume::render,
            ),
            MenuItem::section(
                "💼",
                "Projects",
                "Featured Projects - Portfolio of completed and ongoing work",
                projects::render,
            ),
            MenuItem::section(
                "📧",
                "Contact",
                "Contact Information - Get in touch for opportunities",
                contact::render,
            ),
            MenuItem::section(
                "🛠️",
                "Utilities",
                "Bonus Extras - Diagnostic tools and system utilities",
                utilities::render,
            ),
            MenuItem::exit("❌", "Exit", "Quit Portfolio - Thanks for visiting!"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::render::{plain_text, Canvas, Theme};
    use ratatui::text::Text;

    fn render_to_string(menu: &Menu, index: usize) -> String {
        let theme = Theme::plain();
        let mut out = Vec::new();
        let delay = Settings::immediate().typewriter_delay;
        let mut canvas = Canvas::new(&mut out, &theme, delay);
        menu.item(index)
            .and_then(|item| item.handler())
            .unwrap()
            .render(&mut canvas)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn main_menu_ends_with_exit() {
        let menu = main_menu().unwrap();
        assert_eq!(menu.len(), 6);
        assert!(menu.items()[..5].iter().all(|item| !item.is_exit()));
        assert!(menu.items()[5].is_exit());
    }

    #[test]
    fn every_section_renders() {
        let menu = main_menu().unwrap();
        let expected = [
            "WELCOME TO MY INTERACTIVE PORTFOLIO",
            "PROFESSIONAL RESUME",
            "FEATURED PROJECTS PORTFOLIO",
            "GET IN TOUCH",
            "BONUS EXTRAS & UTILITIES",
        ];
        for (index, title) in expected.iter().enumerate() {
            let out = render_to_string(&menu, index);
            assert!(out.contains(title), "section {} missing '{}'", index, title);
        }
    }

    #[test]
    fn contact_lists_no_phone_number() {
        let menu = main_menu().unwrap();
        let out = render_to_string(&menu, 3);
        assert!(out.contains(profile::EMAIL));
        assert!(!out.contains("Phone"));
    }

    #[test]
    fn welcome_text_is_plain_with_plain_theme() {
        let text: Text = screens::welcome_prompt(&Theme::plain());
        assert!(plain_text(&text).contains("Press any key"));
    }
}
