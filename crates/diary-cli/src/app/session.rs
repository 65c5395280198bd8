//! Handles shared by the menu loop and the actions.

use diary_core::EntryStore;

use crate::console::Console;
use crate::ui::UiContext;

/// Everything an interactive flow needs: the store, the console and the
/// display settings. Built once in `main` and passed down explicitly.
pub struct Session<'a> {
    pub store: &'a mut dyn EntryStore,
    pub console: &'a mut dyn Console,
    pub ui: &'a UiContext,
}

impl<'a> Session<'a> {
    pub fn new(
        store: &'a mut dyn EntryStore,
        console: &'a mut dyn Console,
        ui: &'a UiContext,
    ) -> Self {
        Self { store, console, ui }
    }
}
