//! Introduction: banner, bio and highlights.

use crate::content::{profile, screens};
use crate::render::{styled, Canvas};
use ratatui::text::{Line, Span, Text};

pub fn render(canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    let theme = canvas.theme().clone();

    canvas.text(screens::banner(&theme))?;
    canvas.header(screens::WELCOME_TITLE)?;

    let bio = Text::from(vec![
        styled(format!("👋 Hello! I'm {}", profile::NAME), theme.emphasis),
        Line::default(),
        styled(profile::TAGLINE, theme.item),
        Line::default(),
        Line::from("I'm passionate about creating innovative solutions using modern technologies."),
        Line::from("With experience spanning web development, automation, and system architecture,"),
        Line::from("I love turning complex problems into elegant, user-friendly applications."),
        Line::default(),
        styled("🌟 What I do:", theme.accent),
        Line::from("• Build scalable web applications with modern frameworks"),
        Line::from("• Develop automation tools and CLI utilities"),
        Line::from("• Design efficient database architectures"),
        Line::from("• Create responsive and accessible user interfaces"),
        Line::default(),
        styled(format!("📍 {}", profile::LOCATION), theme.warning),
    ]);
    canvas.typewrite(bio)?;

    canvas.blank()?;
    canvas.line(styled("✨ Portfolio Highlights:", theme.header))?;
    canvas.rule('━', theme.border)?;

    let highlights = [
        (
            "🚀 Innovation-Focused:",
            "Always exploring new technologies and best practices",
            theme.item,
        ),
        (
            "🏆 Results-Driven:",
            "Delivered 25+ successful projects with measurable impact",
            theme.info,
        ),
        (
            "🤝 Collaborative:",
            "Strong communication skills and team leadership experience",
            theme.warning,
        ),
        (
            "🎯 Detail-Oriented:",
            "Emphasis on code quality, testing, and documentation",
            theme.header,
        ),
    ];
    for (title, detail, style) in highlights {
        canvas.line(Line::from(vec![
            Span::styled(title, style),
            Span::raw(format!(" {}", detail)),
        ]))?;
    }

    Ok(())
}
