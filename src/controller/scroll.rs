//! Back-to-top affordance.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::rc::Rc;

use crate::view::PageChrome;

/// Visible strictly above the threshold.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub struct ScrollAffordance {
    chrome: Rc<dyn PageChrome>,
    threshold: f64,
}

impl ScrollAffordance {
    pub fn new(chrome: Rc<dyn PageChrome>, threshold: f64) -> Self {
        Self { chrome, threshold }
    }

    /// Sync control visibility with the current offset.
    pub fn refresh(&self) -> bool {
        let visible = past_threshold(self.chrome.scroll_y(), self.threshold);
        self.chrome.set_back_to_top_visible(visible);
        visible
    }

    pub fn scroll_to_top(&self) {
        self.chrome.scroll_to_top();
    }
}
