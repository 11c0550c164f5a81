//! Window repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide get/replace/update/create/delete over the ordered collection.
//! - Allocate ids for newly created windows.
//!
//! # Invariants
//! - `list_windows` order is the authoritative display sequence.
//! - `update_window` never inserts and never moves a record.
//! - Write paths store only records that pass `WindowRecord::validate()`.
//! - When ids are duplicated (only possible through `replace_windows`),
//!   id-based lookups and updates resolve to the LAST matching record and
//!   `delete_window` removes every match.

use crate::model::seed::seed_windows;
use crate::model::window::{numeric_id, WindowDraft, WindowId, WindowRecord};
use log::debug;
use std::collections::HashSet;

/// Repository interface for the window collection.
pub trait WindowRepository {
    /// Returns the whole collection in sequence order.
    fn list_windows(&self) -> &[WindowRecord];
    /// Replaces the whole collection. Uniqueness of ids is not checked.
    fn replace_windows(&mut self, windows: Vec<WindowRecord>);
    /// Replaces the record whose id matches; returns `false` when absent or
    /// when `window` fails validation.
    fn update_window(&mut self, window: WindowRecord) -> bool;
    /// Appends a new record built from `draft` under a freshly allocated id.
    fn create_window(&mut self, draft: WindowDraft) -> WindowRecord;
    /// Removes records with this id; returns `false` when none existed.
    fn delete_window(&mut self, id: &str) -> bool;

    /// Index of the record with this id (last match).
    fn position_of(&self, id: &str) -> Option<usize> {
        self.list_windows()
            .iter()
            .rposition(|window| window.id == id)
    }

    /// Loads one record by id (last match).
    fn get_window(&self, id: &str) -> Option<&WindowRecord> {
        self.position_of(id)
            .map(|index| &self.list_windows()[index])
    }

    fn len(&self) -> usize {
        self.list_windows().len()
    }

    fn is_empty(&self) -> bool {
        self.list_windows().is_empty()
    }
}

impl<R: WindowRepository + ?Sized> WindowRepository for &mut R {
    fn list_windows(&self) -> &[WindowRecord] {
        (**self).list_windows()
    }

    fn replace_windows(&mut self, windows: Vec<WindowRecord>) {
        (**self).replace_windows(windows);
    }

    fn update_window(&mut self, window: WindowRecord) -> bool {
        (**self).update_window(window)
    }

    fn create_window(&mut self, draft: WindowDraft) -> WindowRecord {
        (**self).create_window(draft)
    }

    fn delete_window(&mut self, id: &str) -> bool {
        (**self).delete_window(id)
    }
}

/// In-memory window store; the single owner of the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryWindowRepository {
    windows: Vec<WindowRecord>,
}

impl InMemoryWindowRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the built-in seed collection.
    pub fn seeded() -> Self {
        Self::from_windows(seed_windows())
    }

    pub fn from_windows(windows: Vec<WindowRecord>) -> Self {
        Self { windows }
    }

    /// Consumes the store and returns its collection.
    pub fn into_windows(self) -> Vec<WindowRecord> {
        self.windows
    }
}

impl WindowRepository for InMemoryWindowRepository {
    fn list_windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    fn replace_windows(&mut self, windows: Vec<WindowRecord>) {
        debug!(
            "event=windows_replaced module=repo status=ok before={} after={}",
            self.windows.len(),
            windows.len()
        );
        self.windows = windows;
    }

    fn update_window(&mut self, window: WindowRecord) -> bool {
        if let Err(err) = window.validate() {
            debug!(
                "event=window_updated module=repo status=skipped reason=invalid error={err:?}"
            );
            return false;
        }
        let Some(index) = self.position_of(&window.id) else {
            debug!(
                "event=window_updated module=repo status=skipped reason=not_found id={}",
                window.id
            );
            return false;
        };
        debug!(
            "event=window_updated module=repo status=ok id={} index={index}",
            window.id
        );
        self.windows[index] = window;
        true
    }

    fn create_window(&mut self, draft: WindowDraft) -> WindowRecord {
        let window = draft.into_record(next_window_id(&self.windows));
        debug!(
            "event=window_created module=repo status=ok id={} index={}",
            window.id,
            self.windows.len()
        );
        self.windows.push(window.clone());
        window
    }

    fn delete_window(&mut self, id: &str) -> bool {
        let before = self.windows.len();
        self.windows.retain(|window| window.id != id);
        let removed = before - self.windows.len();
        debug!(
            "event=window_deleted module=repo status={} id={id} removed={removed}",
            if removed > 0 { "ok" } else { "skipped" }
        );
        removed > 0
    }
}

/// Allocates the id for a new window: highest numeric id plus one.
///
/// Non-numeric ids are ignored. A collection without numeric ids starts at
/// `"1"`. When the highest id is `u64::MAX`, the smallest unused numeric id
/// is taken instead, so an allocated id never collides with a stored one.
pub fn next_window_id(windows: &[WindowRecord]) -> WindowId {
    let used: HashSet<u64> = windows
        .iter()
        .filter_map(|window| numeric_id(&window.id))
        .collect();
    let next = match used.iter().max() {
        None => 1,
        Some(max) => match max.checked_add(1) {
            Some(next) => next,
            None => smallest_unused_id(&used),
        },
    };
    next.to_string()
}

fn smallest_unused_id(used: &HashSet<u64>) -> u64 {
    // `used` is finite, so a gap exists below `u64::MAX`.
    (1..u64::MAX)
        .find(|candidate| !used.contains(candidate))
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::next_window_id;
    use crate::model::window::{Priority, WindowRecord, WindowType};

    fn record(id: &str) -> WindowRecord {
        WindowRecord::new(id, "title", WindowType::Event, Priority::Low, 3, "")
    }

    #[test]
    fn next_id_starts_at_one_for_empty_collection() {
        assert_eq!(next_window_id(&[]), "1");
    }

    #[test]
    fn next_id_uses_numeric_max_not_last_or_lexical() {
        let windows = vec![record("9"), record("12"), record("3")];
        assert_eq!(next_window_id(&windows), "13");
    }

    #[test]
    fn next_id_ignores_non_numeric_ids() {
        let windows = vec![record("draft"), record("4")];
        assert_eq!(next_window_id(&windows), "5");
        assert_eq!(next_window_id(&[record("draft")]), "1");
    }

    #[test]
    fn next_id_fills_lowest_gap_when_max_id_overflows() {
        let max = u64::MAX.to_string();
        let windows = vec![record(&max), record("1"), record("3")];
        assert_eq!(next_window_id(&windows), "2");
        assert_eq!(next_window_id(&[record(&max)]), "1");
    }
}
