//! Key source plus output sink.
//!
//! `Console` is what the navigation layer talks to: it reads normalized-ready keys and writes
//! frames, applying the presentation settings (clearing, typewriter speed, warning pause).
//! A Ctrl+C recorded in its [`InterruptFlag`] surfaces as `Err(Interrupted)` from the next
//! read, warning pause or typewriter write.

use crate::config::Settings;
use crate::error::Result;
use crate::input::{InterruptFlag, KeyReader, RawKey};
use crate::render::canvas::{self, Canvas};
use crate::render::Theme;
use ratatui::crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use ratatui::text::{Line, Text};
use std::io::Write;
use std::thread;

pub struct Console<K, W> {
    keys: K,
    out: W,
    theme: Theme,
    settings: Settings,
    interrupt: InterruptFlag,
}

impl<K: KeyReader, W: Write> Console<K, W> {
    pub fn new(keys: K, out: W, theme: Theme, settings: Settings) -> Self {
        Self {
            keys,
            out,
            theme,
            settings,
            interrupt: InterruptFlag::new(),
        }
    }

    /// Share `interrupt` with the process's Ctrl+C handler
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Flush pending output, then block for the next key.
    ///
    /// A Ctrl+C that arrives while the read blocks wins over the key it returns.
    pub fn read_key(&mut self) -> Result<RawKey> {
        self.out.flush()?;
        self.interrupt.check()?;
        let key = self.keys.read_key()?;
        self.interrupt.check()?;
        Ok(key)
    }

    /// Clear the screen and home the cursor; a no-op when clearing is disabled
    pub fn clear(&mut self) -> Result<()> {
        if self.settings.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    pub fn show(&mut self, text: &Text<'_>) -> Result<()> {
        canvas::write_text(&mut self.out, text)?;
        Ok(())
    }

    /// Write a prompt without a trailing newline and flush it
    pub fn prompt(&mut self, line: &Line<'_>) -> Result<()> {
        canvas::write_spans(&mut self.out, line)?;
        self.out.flush()?;
        Ok(())
    }

    /// End the current line (after a prompt answered in raw mode)
    pub fn newline(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn typewrite(&mut self, text: &Text<'_>) -> Result<()> {
        canvas::typewrite(&mut self.out, text, self.settings.typewriter_delay)?;
        self.interrupt.check()
    }

    /// Keep a warning visible for the configured pause
    pub fn pause_for_warning(&mut self) -> Result<()> {
        self.out.flush()?;
        if !self.settings.warning_pause.is_zero() {
            thread::sleep(self.settings.warning_pause);
        }
        self.interrupt.check()
    }

    /// Surface for a section renderer, borrowing the output
    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(
            &mut self.out,
            &self.theme,
            self.settings.typewriter_delay,
        )
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.out)
    }
}
