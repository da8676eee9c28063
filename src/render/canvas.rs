//! Styled text output.
//!
//! Frames are ratatui `Text` values; this module writes them to any `io::Write` through
//! crossterm's styling commands. `Canvas` is the surface handed to section renderers.

use crate::render::frames;
use crate::render::Theme;
use ratatui::crossterm::queue;
use ratatui::crossterm::style::{self as cstyle, Attribute, Print, SetAttribute};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Draws one content section.
///
/// Renderers only write; they never read input and keep no state between calls.
pub trait SectionRenderer {
    fn render(&self, canvas: &mut Canvas<'_>) -> anyhow::Result<()>;
}

impl<F> SectionRenderer for F
where
    F: Fn(&mut Canvas<'_>) -> anyhow::Result<()>,
{
    fn render(&self, canvas: &mut Canvas<'_>) -> anyhow::Result<()> {
        self(canvas)
    }
}

/// Output surface for section content
pub struct Canvas<'a> {
    out: &'a mut dyn Write,
    theme: &'a Theme,
    typewriter_delay: Duration,
}

impl<'a> Canvas<'a> {
    pub fn new(out: &'a mut dyn Write, theme: &'a Theme, typewriter_delay: Duration) -> Self {
        Self {
            out,
            theme,
            typewriter_delay,
        }
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    pub fn line<'l>(&mut self, line: impl Into<Line<'l>>) -> io::Result<()> {
        write_line(&mut self.out, &line.into())
    }

    pub fn text<'t>(&mut self, text: impl Into<Text<'t>>) -> io::Result<()> {
        write_text(&mut self.out, &text.into())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Boxed section title
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let header = frames::section_header(title, self.theme);
        write_text(&mut self.out, &header)
    }

    /// Full-width horizontal rule
    pub fn rule(&mut self, fill: char, style: Style) -> io::Result<()> {
        write_line(&mut self.out, &frames::rule(fill, frames::FRAME_WIDTH, style))
    }

    /// Reveal `text` one character at a time
    pub fn typewrite<'t>(&mut self, text: impl Into<Text<'t>>) -> io::Result<()> {
        typewrite(&mut self.out, &text.into(), self.typewriter_delay)
    }
}

/// Write every line of `text`, each followed by a newline
pub fn write_text<W: Write>(out: &mut W, text: &Text<'_>) -> io::Result<()> {
    for line in &text.lines {
        write_line(out, line)?;
    }
    Ok(())
}

/// Write one line followed by a newline
pub fn write_line<W: Write>(out: &mut W, line: &Line<'_>) -> io::Result<()> {
    write_spans(out, line)?;
    writeln!(out)
}

/// Write one line without a trailing newline (prompts)
pub fn write_spans<W: Write>(out: &mut W, line: &Line<'_>) -> io::Result<()> {
    for span in &line.spans {
        write_span(out, line.style.patch(span.style), span.content.as_ref())?;
    }
    Ok(())
}

/// Write `text` character by character, flushing and sleeping between characters
pub fn typewrite<W: Write>(out: &mut W, text: &Text<'_>, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return write_text(out, text);
    }

    let mut buf = [0u8; 4];
    for line in &text.lines {
        for span in &line.spans {
            let style = line.style.patch(span.style);
            for ch in span.content.chars() {
                write_span(out, style, ch.encode_utf8(&mut buf))?;
                out.flush()?;
                thread::sleep(delay);
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

fn write_span<W: Write>(out: &mut W, style: Style, content: &str) -> io::Result<()> {
    let styled = apply_style(out, style)?;
    queue!(out, Print(content))?;
    if styled {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Emit the escape codes for `style`; returns whether anything was emitted
fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<bool> {
    let mut styled = false;

    if let Some(fg) = style.fg {
        queue!(out, cstyle::SetForegroundColor(to_crossterm_color(fg)))?;
        styled = true;
    }
    if let Some(bg) = style.bg {
        queue!(out, cstyle::SetBackgroundColor(to_crossterm_color(bg)))?;
        styled = true;
    }

    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
    ] {
        if style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
            styled = true;
        }
    }

    Ok(styled)
}

fn to_crossterm_color(color: Color) -> cstyle::Color {
    match color {
        Color::Reset => cstyle::Color::Reset,
        Color::Black => cstyle::Color::Black,
        Color::Red => cstyle::Color::DarkRed,
        Color::Green => cstyle::Color::DarkGreen,
        Color::Yellow => cstyle::Color::DarkYellow,
        Color::Blue => cstyle::Color::DarkBlue,
        Color::Magenta => cstyle::Color::DarkMagenta,
        Color::Cyan => cstyle::Color::DarkCyan,
        Color::Gray => cstyle::Color::Grey,
        Color::DarkGray => cstyle::Color::DarkGrey,
        Color::LightRed => cstyle::Color::Red,
        Color::LightGreen => cstyle::Color::Green,
        Color::LightYellow => cstyle::Color::Yellow,
        Color::LightBlue => cstyle::Color::Blue,
        Color::LightMagenta => cstyle::Color::Magenta,
        Color::LightCyan => cstyle::Color::Cyan,
        Color::White => cstyle::Color::White,
        Color::Indexed(index) => cstyle::Color::AnsiValue(index),
        Color::Rgb(r, g, b) => cstyle::Color::Rgb { r, g, b },
    }
}

/// Plain-text rendering of `text`, one `\n` per line
pub fn plain_text(text: &Text<'_>) -> String {
    let mut rendered = String::new();
    for line in &text.lines {
        for span in &line.spans {
            rendered.push_str(&span.content);
        }
        rendered.push('\n');
    }
    rendered
}

/// Single-span styled line, the common case for content output
pub fn styled<'a>(content: impl Into<std::borrow::Cow<'a, str>>, style: Style) -> Line<'a> {
    Line::from(Span::styled(content, style))
}
