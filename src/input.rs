//! Input subsystem.
//!
//! `raw` acquires keystrokes from the terminal (or a line-based fallback); `keymap` turns them
//! into menu actions; `interrupt` carries Ctrl+C received outside raw mode.

pub mod interrupt;
pub mod keymap;
pub mod raw;

// Modules outside this crate should prefer importing from `crate::input` rather than
// reaching into submodules.
pub use interrupt::InterruptFlag;
pub use keymap::{normalize, InputAction};
pub use raw::{
    ByteKeyReader, ConsoleKeyReader, CrosstermRawMode, EventKeyReader, FallbackReader, FallbackReason,
    KeyReader, LineKeyReader, RawKey, RawModeControl, RawModeGuard, StdinFallback, TerminalMode,
};
