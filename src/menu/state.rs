//! Selection cursor over a menu's items.

use crate::menu::{Menu, MenuItem};

/// Cursor state for one navigation session.
///
/// `selected` is always a valid index; moves wrap around both ends.
#[derive(Debug, Clone, Copy)]
pub struct MenuState<'a> {
    items: &'a [MenuItem],
    selected: usize,
}

impl<'a> MenuState<'a> {
    /// Start a session with the first item selected
    pub fn new(menu: &'a Menu) -> Self {
        Self {
            items: menu.items(),
            selected: 0,
        }
    }

    pub fn move_up(&mut self) {
        let len = self.items.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Jump to `index`. Out-of-range values are ignored; returns whether the cursor moved there.
    pub fn select_by_number(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &'a MenuItem {
        &self.items[self.selected]
    }

    pub fn items(&self) -> &'a [MenuItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
