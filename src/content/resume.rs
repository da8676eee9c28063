//! Resume: skills matrix, quick stats and the professional timeline.

use crate::content::profile;
use crate::render::{styled, Canvas, Theme};
use ratatui::text::{Line, Span};

pub fn render(canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    let theme = canvas.theme().clone();

    canvas.header("PROFESSIONAL RESUME")?;
    skills_matrix(canvas, &theme)?;
    experience_stats(canvas, &theme)?;
    journey(canvas, &theme)?;

    canvas.blank()?;
    canvas.rule('━', theme.border)?;
    canvas.line(styled(
        "💡 Want to see my work in action? Open the Projects section from the main menu!",
        theme.warning,
    ))?;
    Ok(())
}

fn skills_matrix(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.line(styled("🛠️ TECHNICAL SKILLS MATRIX", theme.header))?;
    canvas.rule('━', theme.border)?;

    canvas.blank()?;
    canvas.line(styled("Core Competencies:", theme.emphasis))?;
    for (category, skills) in profile::CORE_SKILLS {
        canvas.line(Line::from(vec![
            Span::styled(format!("▪ {}:", category), theme.item),
            Span::raw(format!(" {}", skills.join(" • "))),
        ]))?;
    }

    canvas.blank()?;
    canvas.line(styled("Emerging Skills:", theme.emphasis))?;
    canvas.line(styled(
        format!("🚀 {}", profile::EMERGING_SKILLS.join(" • ")),
        theme.warning,
    ))?;
    Ok(())
}

fn experience_stats(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.blank()?;
    canvas.line(styled("📊 PROFESSIONAL EXPERIENCE", theme.header))?;
    canvas.rule('━', theme.border)?;

    canvas.blank()?;
    canvas.line(styled("Quick Stats:", theme.emphasis))?;
    let palette = [theme.item, theme.info, theme.warning, theme.header, theme.accent];
    for ((stat, value), style) in profile::QUICK_STATS.iter().zip(palette.iter().cycle()) {
        canvas.line(Line::from(vec![
            Span::styled(format!("▶ {}: ", stat), *style),
            Span::styled(*value, theme.emphasis),
        ]))?;
    }
    Ok(())
}

fn journey(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.blank()?;
    canvas.line(styled("🗓️ PROFESSIONAL JOURNEY", theme.header))?;
    canvas.rule('━', theme.border)?;

    for (period, role, achievements) in profile::TIMELINE {
        canvas.blank()?;
        canvas.line(styled(*period, theme.info.patch(theme.emphasis)))?;
        canvas.line(styled(*role, theme.header))?;
        for achievement in *achievements {
            canvas.line(Line::from(vec![
                Span::styled("  ✓", theme.item),
                Span::raw(format!(" {}", achievement)),
            ]))?;
        }
    }
    Ok(())
}
