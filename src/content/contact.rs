//! Contact methods and the call to action.

use crate::content::profile;
use crate::render::{styled, Canvas};
use ratatui::text::{Line, Span};

pub fn render(canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    let theme = canvas.theme().clone();

    canvas.header("GET IN TOUCH")?;
    canvas.line(styled("    📧 Let's Connect!", theme.accent))?;
    canvas.rule('═', theme.border)?;
    canvas.blank()?;

    canvas.line(styled(
        "Ready to collaborate? I'd love to hear from you!",
        theme.emphasis,
    ))?;
    canvas.blank()?;

    canvas.line(styled("Contact Methods:", theme.header))?;
    for (method, address, purpose) in profile::CONTACT_METHODS {
        canvas.line(styled(format!("{}:", method), theme.item))?;
        canvas.line(styled(format!("  {}", address), theme.emphasis))?;
        canvas.line(styled(format!("  └─ {}", purpose), theme.accent))?;
        canvas.blank()?;
    }

    canvas.rule('─', theme.border)?;

    canvas.blank()?;
    canvas.line(styled("🤝 What I'm Looking For:", theme.header))?;
    for opportunity in profile::OPPORTUNITIES {
        canvas.line(Line::from(vec![
            Span::styled("  ▶", theme.info),
            Span::raw(format!(" {}", opportunity)),
        ]))?;
    }

    canvas.blank()?;
    canvas.line(styled("💡 Call to Action:", theme.warning))?;
    canvas.line(
        "Have an interesting project or opportunity? Let's discuss how we can work together!",
    )?;
    canvas.line(Line::from(vec![
        Span::raw("I respond to all messages within 24 hours. "),
        Span::styled("I'm excited to connect!", theme.item),
    ]))?;

    canvas.blank()?;
    canvas.rule('═', theme.border)?;
    Ok(())
}
