//! Theme initialization and toggle.
//!
//! Reads the preference from storage (falling back to the system color
//! scheme) and applies it to the `data-theme` attribute, the toggle icon and
//! the `theme-color` meta tag. Every change is written back to storage.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::state::theme::{THEME_KEY, ThemePreference};
use crate::util::storage::{self, Storage};
use crate::view::PageChrome;

pub struct ThemeManager {
    chrome: Rc<dyn PageChrome>,
    storage: Rc<dyn Storage>,
}

impl ThemeManager {
    pub fn new(chrome: Rc<dyn PageChrome>, storage: Rc<dyn Storage>) -> Self {
        Self { chrome, storage }
    }

    /// Startup mode: persisted, else system preference, else light.
    pub fn initial(&self) -> ThemePreference {
        let saved = storage::load(self.storage.as_ref(), THEME_KEY);
        ThemePreference::resolve(saved.as_deref(), self.chrome.prefers_dark())
    }

    /// Resolve and apply the startup mode.
    pub fn init(&self) -> ThemePreference {
        let mode = self.initial();
        self.apply(mode);
        mode
    }

    pub fn apply(&self, mode: ThemePreference) {
        self.chrome.set_theme_attribute(mode.as_str());
        storage::save(self.storage.as_ref(), THEME_KEY, mode.as_str());
        self.chrome.set_toggle_icon(mode.icon_class());
        self.chrome.set_theme_color(mode.theme_color());
    }

    /// Flip whatever the page currently shows.
    pub fn toggle(&self) -> ThemePreference {
        let current = ThemePreference::from_attribute(self.chrome.theme_attribute().as_deref());
        let next = current.toggled();
        self.apply(next);
        next
    }
}
