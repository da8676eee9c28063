//! # portfolio-term - Interactive Terminal Portfolio
//!
//! A keyboard-navigated terminal menu presenting static portfolio content (bio, resume,
//! projects, contact details and diagnostics) organized into sections.
//!
//! ## Features
//!
//! - **Single-key navigation**: arrow keys, vim keys, digits and letter commands
//! - **Scoped raw mode**: the terminal is restored after every read, on every exit path
//! - **Non-interactive fallback**: piped or detached input degrades to line prompts
//! - **Recoverable faults**: a failing section shows an error screen instead of crashing
//!
//! ## Architecture
//!
//! - [`input`] - Raw key acquisition and key normalization
//! - [`menu`] - Menu items and the selection cursor
//! - [`navigation`] - Menu state machine and section footer loop
//! - [`render`] - Themes, frame builders and the console
//! - [`content`] - Portfolio sections and screens
//! - [`app`] - Top-level application loop

// Core modules
pub mod config;
pub mod error;

// Input and presentation
pub mod input;
pub mod menu;
pub mod render;

// Navigation and content
pub mod content;
pub mod navigation;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{PortfolioError, Result};

// Public API surface for external usage
pub use app::Application;
pub use config::Settings;
pub use input::{ConsoleKeyReader, InterruptFlag, KeyReader, RawKey};
pub use menu::{Menu, MenuItem, MenuState};
pub use navigation::{NavigationController, NavigationResult, SectionRunner};
pub use render::{Console, Theme};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
