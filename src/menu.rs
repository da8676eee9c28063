//! Menu model: immutable item lists and the per-session selection cursor.

pub mod item;
pub mod state;

pub use item::{Menu, MenuItem};
pub use state::MenuState;
