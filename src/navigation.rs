//! Navigation layer: the menu state machine and the per-section footer loop.

pub mod controller;
pub mod section;

pub use controller::{NavigationController, NavigationResult};
pub use section::{section_command, SectionCommand, SectionRunner};
