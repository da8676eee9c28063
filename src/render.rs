//! Rendering subsystem.
//!
//! Frames are built as ratatui `Text` by pure functions in [`frames`] and written to the
//! terminal by [`Console`]. Section content draws through a [`Canvas`].

pub mod canvas;
pub mod console;
pub mod frames;
pub mod theme;

pub use canvas::{plain_text, styled, Canvas, SectionRenderer};
pub use console::Console;
pub use theme::Theme;
