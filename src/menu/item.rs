//! Menu items and the menus that own them.

use crate::error::{PortfolioError, Result};
use crate::render::SectionRenderer;
use std::fmt;

/// One selectable entry. An item without a handler is the menu's exit entry.
pub struct MenuItem {
    icon: String,
    label: String,
    description: String,
    handler: Option<Box<dyn SectionRenderer>>,
}

impl MenuItem {
    /// Entry that opens a content section
    pub fn section(
        icon: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        handler: impl SectionRenderer + 'static,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            description: description.into(),
            handler: Some(Box::new(handler)),
        }
    }

    /// Entry that leaves the menu
    pub fn exit(
        icon: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            description: description.into(),
            handler: None,
        }
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn handler(&self) -> Option<&dyn SectionRenderer> {
        self.handler.as_deref()
    }

    pub fn is_exit(&self) -> bool {
        self.handler.is_none()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("is_exit", &self.is_exit())
            .finish()
    }
}

/// A titled, non-empty list of items.
#[derive(Debug)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Result<Self> {
        let title = title.into();
        if items.is_empty() {
            return Err(PortfolioError::EmptyMenu { title });
        }
        Ok(Self { title, items })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
