//! Low-level keystroke acquisition: raw-mode scoping, byte-level escape decoding, the crossterm
//! event path, and the line-buffered fallback used when no terminal is attached.
//!
//! Every reader blocks until exactly one key (or one escape sequence, or one fallback line) is
//! available. Raw mode is held only for the duration of that single read.

use crate::error::{PortfolioError, Result};
use log::{trace, warn};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::terminal;
use std::convert::Infallible;
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::str::FromStr;

/// Escape introducer byte.
const ESC: u8 = 0x1b;
/// Byte produced by Ctrl+C while the terminal is in raw mode.
const CTRL_C: u8 = 0x03;
/// Prompt printed by the line-based fallback reader.
const FALLBACK_PROMPT: &str = "Press Enter to continue, 'q' to quit: ";

/// A single keystroke as delivered by a reader, before any menu interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Char(char),
    /// Multi-character input such as a named key or a typed word.
    Text(String),
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Up => f.write_str("UP"),
            RawKey::Down => f.write_str("DOWN"),
            RawKey::Left => f.write_str("LEFT"),
            RawKey::Right => f.write_str("RIGHT"),
            RawKey::Enter => f.write_str("ENTER"),
            RawKey::Escape => f.write_str("ESC"),
            RawKey::Char(ch) => write!(f, "{}", ch.escape_debug()),
            RawKey::Text(text) => f.write_str(text),
        }
    }
}

impl FromStr for RawKey {
    type Err = Infallible;

    /// Parse the printable key names back into keys. Single characters become `Char`,
    /// anything else that is not a key name becomes `Text`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = match s.to_ascii_uppercase().as_str() {
            "UP" => RawKey::Up,
            "DOWN" => RawKey::Down,
            "LEFT" => RawKey::Left,
            "RIGHT" => RawKey::Right,
            "ENTER" => RawKey::Enter,
            "ESC" | "ESCAPE" => RawKey::Escape,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => RawKey::Char(ch),
                    _ => RawKey::Text(s.to_string()),
                }
            }
        };
        Ok(key)
    }
}

/// Source of keystrokes for the navigation layer.
///
/// `Err(PortfolioError::Interrupted)` is the cancellation signal; readers must never swallow it.
pub trait KeyReader {
    /// Block until one key is available.
    fn read_key(&mut self) -> Result<RawKey>;
}

impl<K: KeyReader + ?Sized> KeyReader for Box<K> {
    fn read_key(&mut self) -> Result<RawKey> {
        (**self).read_key()
    }
}

impl<K: KeyReader + ?Sized> KeyReader for &mut K {
    fn read_key(&mut self) -> Result<RawKey> {
        (**self).read_key()
    }
}

/// Whether standard input can deliver raw keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    Interactive,
    NonInteractive,
}

impl TerminalMode {
    /// Probe standard input. Called before every read since piped input can be exhausted
    /// or detached while the program runs.
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            TerminalMode::Interactive
        } else {
            TerminalMode::NonInteractive
        }
    }
}

/// Switches the terminal between raw and cooked input.
pub trait RawModeControl {
    fn is_enabled(&self) -> io::Result<bool>;
    fn enable(&mut self) -> io::Result<()>;
    fn disable(&mut self) -> io::Result<()>;
}

/// Raw-mode control backed by crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermRawMode;

impl RawModeControl for CrosstermRawMode {
    fn is_enabled(&self) -> io::Result<bool> {
        terminal::is_raw_mode_enabled()
    }

    fn enable(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Holds raw mode for one read and restores the previous mode when dropped.
///
/// Only a mode this guard switched on is switched back off, so the terminal always ends in
/// the state it was in before `acquire`.
pub struct RawModeGuard<'a, C: RawModeControl> {
    control: &'a mut C,
    restore: bool,
}

impl<'a, C: RawModeControl> RawModeGuard<'a, C> {
    pub fn acquire(control: &'a mut C) -> Result<Self> {
        let already_raw = control
            .is_enabled()
            .map_err(|err| PortfolioError::terminal("query terminal mode", err))?;

        if !already_raw {
            control
                .enable()
                .map_err(|err| PortfolioError::terminal("enable raw mode", err))?;
        }

        Ok(Self {
            control,
            restore: !already_raw,
        })
    }
}

impl<C: RawModeControl> Drop for RawModeGuard<'_, C> {
    fn drop(&mut self) {
        if self.restore {
            if let Err(err) = self.control.disable() {
                warn!("Failed to restore terminal mode: {}", err);
            }
        }
    }
}

/// Decode one keystroke from a raw byte stream.
///
/// `ESC` consumes exactly two more bytes: `[A`..`[D` are arrows, anything else is a plain
/// Escape. End of stream reads as Escape so a closed input terminates navigation gracefully.
pub fn decode_key<R: Read>(input: &mut R) -> Result<RawKey> {
    let first = match read_byte(input)? {
        Some(byte) => byte,
        None => return Ok(RawKey::Escape),
    };

    match first {
        ESC => {
            let mut sequence = [0u8; 2];
            let mut filled = 0;
            while filled < sequence.len() {
                match read_byte(input)? {
                    Some(byte) => {
                        sequence[filled] = byte;
                        filled += 1;
                    }
                    None => break,
                }
            }
            Ok(match &sequence[..filled] {
                [b'[', b'A'] => RawKey::Up,
                [b'[', b'B'] => RawKey::Down,
                [b'[', b'C'] => RawKey::Right,
                [b'[', b'D'] => RawKey::Left,
                _ => RawKey::Escape,
            })
        }
        b'\r' | b'\n' => Ok(RawKey::Enter),
        CTRL_C => Err(PortfolioError::Interrupted),
        byte => decode_char(byte, input),
    }
}

fn read_byte<R: Read>(input: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(PortfolioError::terminal("read keystroke", err)),
        }
    }
}

fn decode_char<R: Read>(first: u8, input: &mut R) -> Result<RawKey> {
    let width = utf8_width(first);
    match width {
        0 => return Ok(RawKey::Char(char::REPLACEMENT_CHARACTER)),
        1 => return Ok(RawKey::Char(first as char)),
        _ => {}
    }

    let mut buf = [0u8; 4];
    buf[0] = first;
    for slot in buf[1..width].iter_mut() {
        match read_byte(input)? {
            Some(byte) => *slot = byte,
            None => return Ok(RawKey::Char(char::REPLACEMENT_CHARACTER)),
        }
    }

    let ch = std::str::from_utf8(&buf[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(RawKey::Char(ch))
}

/// Encoded length of a UTF-8 sequence given its leading byte (0 for invalid leaders).
fn utf8_width(byte: u8) -> usize {
    match byte {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

/// Raw-mode reader that decodes bytes straight from the input stream (Unix terminals).
pub struct ByteKeyReader<C, R> {
    control: C,
    input: R,
}

impl<C: RawModeControl, R: Read> ByteKeyReader<C, R> {
    pub fn new(control: C, input: R) -> Self {
        Self { control, input }
    }

    pub fn control(&self) -> &C {
        &self.control
    }
}

impl<C: RawModeControl, R: Read> KeyReader for ByteKeyReader<C, R> {
    fn read_key(&mut self) -> Result<RawKey> {
        let _guard = RawModeGuard::acquire(&mut self.control)?;
        decode_key(&mut self.input)
    }
}

/// Raw-mode reader built on crossterm key events (Windows consoles).
pub struct EventKeyReader<C> {
    control: C,
}

impl<C: RawModeControl> EventKeyReader<C> {
    pub fn new(control: C) -> Self {
        Self { control }
    }
}

impl<C: RawModeControl> KeyReader for EventKeyReader<C> {
    fn read_key(&mut self) -> Result<RawKey> {
        let _guard = RawModeGuard::acquire(&mut self.control)?;
        loop {
            let event = event::read()
                .map_err(|err| PortfolioError::terminal("read terminal event", err))?;
            if let Event::Key(key_event) = event {
                if let Some(key) = translate_key_event(key_event) {
                    return key;
                }
            }
        }
    }
}

/// Translate a crossterm key event. Releases and repeats are skipped (`None`).
pub fn translate_key_event(key_event: KeyEvent) -> Option<Result<RawKey>> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Err(PortfolioError::Interrupted));
    }

    let key = match key_event.code {
        KeyCode::Up => RawKey::Up,
        KeyCode::Down => RawKey::Down,
        KeyCode::Left => RawKey::Left,
        KeyCode::Right => RawKey::Right,
        KeyCode::Enter => RawKey::Enter,
        KeyCode::Esc => RawKey::Escape,
        KeyCode::Char(ch) => RawKey::Char(ch),
        KeyCode::Tab => RawKey::Char('\t'),
        other => RawKey::Text(format!("{:?}", other)),
    };
    Some(Ok(key))
}

/// Why the line-based fallback is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NonInteractive,
    TerminalUnavailable,
}

impl FallbackReason {
    pub fn notice(self) -> &'static str {
        match self {
            FallbackReason::NonInteractive => {
                "Non-interactive environment detected. Using fallback input method."
            }
            FallbackReason::TerminalUnavailable => {
                "Terminal interaction unavailable. Using fallback input method."
            }
        }
    }
}

/// Line-buffered reader: one line of input stands in for one key.
pub struct LineKeyReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineKeyReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn read_key_with(&mut self, reason: FallbackReason) -> Result<RawKey> {
        if let Err(err) = self.write_prompt(reason) {
            trace!("Fallback prompt not shown: {}", err);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(RawKey::Escape),
            Ok(_) => Ok(line_to_key(&line)),
            Err(err) => {
                warn!("Fallback input unreadable, treating as quit: {}", err);
                Ok(RawKey::Escape)
            }
        }
    }

    fn write_prompt(&mut self, reason: FallbackReason) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", reason.notice())?;
        write!(self.output, "{}", FALLBACK_PROMPT)?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> KeyReader for LineKeyReader<R, W> {
    fn read_key(&mut self) -> Result<RawKey> {
        self.read_key_with(FallbackReason::NonInteractive)
    }
}

/// Map one fallback line to a synthetic key: `q`/`quit` is Escape, anything else is Enter.
pub fn line_to_key(line: &str) -> RawKey {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" => RawKey::Escape,
        _ => RawKey::Enter,
    }
}

/// Line-based reader used when raw keystrokes are unavailable.
pub trait FallbackReader {
    fn read_fallback(&mut self, reason: FallbackReason) -> Result<RawKey>;
}

impl<R: BufRead, W: Write> FallbackReader for LineKeyReader<R, W> {
    fn read_fallback(&mut self, reason: FallbackReason) -> Result<RawKey> {
        self.read_key_with(reason)
    }
}

/// Line fallback over the process's stdin and stdout. Stdin is locked for one read only.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinFallback;

impl FallbackReader for StdinFallback {
    fn read_fallback(&mut self, reason: FallbackReason) -> Result<RawKey> {
        LineKeyReader::new(io::stdin().lock(), io::stdout()).read_key_with(reason)
    }
}

/// Process-level reader: probes standard input before each read and dispatches to the
/// platform raw reader or the line fallback.
pub struct ConsoleKeyReader<F = StdinFallback> {
    raw: Box<dyn KeyReader>,
    fallback: F,
    probe: fn() -> TerminalMode,
}

impl ConsoleKeyReader {
    /// Select the platform raw reader once, at startup.
    pub fn new() -> Self {
        let raw: Box<dyn KeyReader> = if cfg!(windows) {
            Box::new(EventKeyReader::new(CrosstermRawMode))
        } else {
            Box::new(ByteKeyReader::new(CrosstermRawMode, io::stdin()))
        };
        Self::with_parts(raw, StdinFallback, TerminalMode::detect)
    }
}

impl<F: FallbackReader> ConsoleKeyReader<F> {
    pub fn with_parts(raw: Box<dyn KeyReader>, fallback: F, probe: fn() -> TerminalMode) -> Self {
        Self {
            raw,
            fallback,
            probe,
        }
    }
}

impl Default for ConsoleKeyReader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FallbackReader> KeyReader for ConsoleKeyReader<F> {
    fn read_key(&mut self) -> Result<RawKey> {
        let mode = (self.probe)();
        trace!("Terminal mode for this read: {:?}", mode);

        match mode {
            TerminalMode::Interactive => match self.raw.read_key() {
                Err(err) if err.is_terminal_unavailable() => {
                    warn!("Raw keystroke capture failed, using line input: {}", err);
                    self.fallback.read_fallback(FallbackReason::TerminalUnavailable)
                }
                other => other,
            },
            TerminalMode::NonInteractive => {
                self.fallback.read_fallback(FallbackReason::NonInteractive)
            }
        }
    }
}
