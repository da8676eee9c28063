//! Diagnostics and utilities.

use crate::render::{styled, Canvas, Theme};
use ratatui::text::{Line, Span};
use std::env;

/// The program never opens network connections, so connectivity is reported as unchecked.
const CONNECTIVITY_STATUS: &str = "  ⏳ Internet connectivity: Not checked (offline mode)";

pub fn render(canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
    let theme = canvas.theme().clone();

    canvas.header("BONUS EXTRAS & UTILITIES")?;
    canvas.line(styled(
        "Welcome to the utility section! Here are some diagnostic tools:",
        theme.emphasis,
    ))?;
    canvas.blank()?;

    system_info(canvas, &theme)?;
    color_test(canvas, &theme)?;
    network_test(canvas, &theme)?;
    utility_list(canvas, &theme)?;

    canvas.blank()?;
    canvas.line(styled("💡 Future Enhancements:", theme.warning))?;
    canvas.line("This section is designed to be modular and extensible.")?;
    canvas.line("Additional utilities and scripts can be easily added to enhance functionality.")?;
    Ok(())
}

/// (label, value) rows for the system information block
pub fn system_info_rows() -> Vec<(&'static str, String)> {
    vec![
        (
            "Operating System",
            format!("{} ({})", env::consts::OS, env::consts::FAMILY),
        ),
        ("Program Version", crate::VERSION.to_string()),
        ("Architecture", env::consts::ARCH.to_string()),
        (
            "Terminal",
            env::var("TERM").unwrap_or_else(|_| "Unknown".to_string()),
        ),
        (
            "Current Time",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
    ]
}

fn system_info(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.line(styled("🖥️ System Information:", theme.header))?;
    for (label, value) in system_info_rows() {
        canvas.line(Line::from(vec![
            Span::styled(format!("  {}:", label), theme.accent),
            Span::raw(format!(" {}", value)),
        ]))?;
    }
    Ok(())
}

fn color_test(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.blank()?;
    canvas.line(styled("🎨 Color Test:", theme.header))?;
    for (style, name) in [
        (theme.error, "Red"),
        (theme.item, "Green"),
        (theme.info, "Blue"),
        (theme.warning, "Yellow"),
        (theme.header, "Purple"),
        (theme.accent, "Cyan"),
    ] {
        canvas.line(Line::from(vec![
            Span::raw("  "),
            Span::styled("■", style),
            Span::raw(format!(" {}", name)),
        ]))?;
    }
    Ok(())
}

fn network_test(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.blank()?;
    canvas.line(styled("🌐 Network Test:", theme.header))?;
    canvas.line(styled(CONNECTIVITY_STATUS, theme.warning))?;
    Ok(())
}

const UTILITIES: &[(&str, &str, bool)] = &[
    ("System Diagnostics", "Basic system information and status", true),
    (
        "Color Compatibility Test",
        "Terminal color support verification",
        true,
    ),
    (
        "Network Connectivity Check",
        "Internet connection validation",
        true,
    ),
    (
        "Performance Metrics",
        "Coming soon - system performance stats",
        false,
    ),
    (
        "Environment Variables",
        "Coming soon - env var inspection",
        false,
    ),
    (
        "Git Repository Status",
        "Coming soon - git status checker",
        false,
    ),
];

fn utility_list(canvas: &mut Canvas<'_>, theme: &Theme) -> anyhow::Result<()> {
    canvas.blank()?;
    canvas.line(styled("🛠️ Available Utilities:", theme.header))?;
    for (utility, description, available) in UTILITIES {
        let status = if *available {
            Span::styled("  ✓", theme.item)
        } else {
            Span::styled("  ⏳", theme.warning)
        };
        canvas.line(Line::from(vec![
            status,
            Span::raw(" "),
            Span::styled(*utility, theme.emphasis),
        ]))?;
        canvas.line(styled(format!("    └─ {}", description), theme.accent))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_info_reports_platform() {
        let rows = system_info_rows();
        let arch = rows
            .iter()
            .find(|(label, _)| *label == "Architecture")
            .map(|(_, value)| value.as_str());
        assert_eq!(arch, Some(env::consts::ARCH));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn network_test_reports_unchecked() {
        let theme = Theme::plain();
        let mut out = Vec::new();
        let mut canvas = Canvas::new(&mut out, &theme, std::time::Duration::ZERO);
        network_test(&mut canvas, &theme).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("Internet connectivity: Not checked"));
        assert!(!written.contains("OK"));
    }
}
