//! Presented-window state for the game screen emulator.
//!
//! # Invariants
//! - A window is either in the active set (shown) or gone; dismissal is
//!   terminal for that window.
//! - The active set never holds the same id twice.
//! - An empty active set is the only completion signal.

use crate::model::window::{LineNumber, WindowRecord};
use crate::query::filter::sort_by_priority;
use log::debug;

/// Windows currently stacked on the emulated game screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    active: Vec<WindowRecord>,
}

impl Presentation {
    /// Starts a presentation with every selected window shown.
    pub fn open<'a, I>(selection: I) -> Self
    where
        I: IntoIterator<Item = &'a WindowRecord>,
    {
        let mut presentation = Self::default();
        for window in selection {
            presentation.present(window);
        }
        presentation
    }

    /// Shows one more window; returns `false` if it is already shown.
    pub fn present(&mut self, window: &WindowRecord) -> bool {
        if self.active.iter().any(|shown| shown.id == window.id) {
            return false;
        }
        self.active.push(window.clone());
        true
    }

    /// Closes a shown window; returns `false` if it was not shown.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.active.len();
        self.active.retain(|shown| shown.id != id);
        let dismissed = self.active.len() != before;
        if dismissed {
            debug!(
                "event=window_dismissed module=simulator status=ok id={id} remaining={}",
                self.active.len()
            );
        }
        dismissed
    }

    /// Front-most window still shown.
    pub fn current(&self) -> Option<&WindowRecord> {
        self.active.first()
    }

    pub fn active(&self) -> &[WindowRecord] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Step-through of one lobby lane, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneWalkthrough {
    line: LineNumber,
    queue: Vec<WindowRecord>,
    cursor: usize,
}

impl LaneWalkthrough {
    /// Collects the lane's windows in priority order (stable within a rank).
    pub fn for_lane(windows: &[WindowRecord], line: LineNumber) -> Self {
        let queue = sort_by_priority(windows.iter().filter(|window| window.line == line))
            .into_iter()
            .cloned()
            .collect();
        Self {
            line,
            queue,
            cursor: 0,
        }
    }

    pub fn line(&self) -> LineNumber {
        self.line
    }

    pub fn current(&self) -> Option<&WindowRecord> {
        self.queue.get(self.cursor)
    }

    /// Dismisses the current window and returns the next one, if any.
    pub fn advance(&mut self) -> Option<&WindowRecord> {
        if self.cursor < self.queue.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Windows not yet dismissed, current one first.
    pub fn remaining(&self) -> &[WindowRecord] {
        &self.queue[self.cursor..]
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.queue.len()
    }
}
