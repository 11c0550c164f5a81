//! Window sequencing and editing use-case service.
//!
//! # Responsibility
//! - Reorder the collection (adjacent move, drag swap) and move windows
//!   between lanes.
//! - Provide the editor's edit flows on top of the store.
//!
//! # Invariants
//! - Every mutation goes through `WindowRepository`.
//! - Reordering swaps storage slots only; `line` and `priority` stay as they
//!   were.
//! - Boundary moves are no-ops: nothing is clamped or wrapped.
//! - Only `change_priority` remaps a window's lane.

use crate::model::window::{LineNumber, Priority, WindowDraft, WindowRecord, WindowType};
use crate::repo::window_repo::WindowRepository;
use log::{debug, info};

/// Direction of a single-step move in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the start of the sequence (index - 1).
    Up,
    /// Towards the end of the sequence (index + 1).
    Down,
}

impl MoveDirection {
    /// Maps a `-1 | +1` step to a direction.
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            -1 => Some(Self::Up),
            1 => Some(Self::Down),
            _ => None,
        }
    }

    fn target_index(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Self::Up => index.checked_sub(1)?,
            Self::Down => index + 1,
        };
        (target < len).then_some(target)
    }
}

/// Sequencing facade over a window store.
///
/// Pass `&mut store` to keep using the store after the service is dropped.
pub struct SequenceService<R: WindowRepository> {
    repo: R,
}

impl<R: WindowRepository> SequenceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Current sequence.
    pub fn windows(&self) -> &[WindowRecord] {
        self.repo.list_windows()
    }

    /// Swaps the window with its neighbour in `direction`.
    ///
    /// Returns `false` when the id is unknown or the window already sits at
    /// the boundary it is moved towards.
    pub fn move_adjacent(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.repo.position_of(id) else {
            debug!("event=window_moved module=sequence status=skipped reason=not_found id={id}");
            return false;
        };
        let Some(target) = direction.target_index(index, self.repo.len()) else {
            debug!(
                "event=window_moved module=sequence status=skipped reason=boundary \
                 id={id} index={index}"
            );
            return false;
        };

        self.swap_slots(index, target);
        info!("event=window_moved module=sequence status=ok id={id} from={index} to={target}");
        true
    }

    /// [`Self::move_adjacent`] for a signed step; only `-1` and `+1` move.
    pub fn move_by(&mut self, id: &str, delta: i32) -> bool {
        match MoveDirection::from_delta(delta) {
            Some(direction) => self.move_adjacent(id, direction),
            None => false,
        }
    }

    /// Assigns the window to another lane without touching its position.
    pub fn move_to_lane(&mut self, id: &str, line: LineNumber) -> bool {
        let Some(mut window) = self.repo.get_window(id).cloned() else {
            debug!(
                "event=window_lane_changed module=sequence status=skipped reason=not_found id={id}"
            );
            return false;
        };
        let from = window.line;
        window.line = line;
        if !self.repo.update_window(window) {
            return false;
        }
        info!("event=window_lane_changed module=sequence status=ok id={id} from={from} to={line}");
        true
    }

    /// Swaps the positions of two windows, as a drag-and-drop drop does.
    ///
    /// Returns `false` when the ids are equal or either one is unknown.
    pub fn swap_by_drag(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            return false;
        }
        let (Some(source), Some(target)) = (
            self.repo.position_of(source_id),
            self.repo.position_of(target_id),
        ) else {
            debug!(
                "event=window_swapped module=sequence status=skipped reason=not_found \
                 source={source_id} target={target_id}"
            );
            return false;
        };

        self.swap_slots(source, target);
        info!(
            "event=window_swapped module=sequence status=ok source={source_id} \
             target={target_id} from={source} to={target}"
        );
        true
    }

    /// Changes the window type only.
    pub fn change_type(&mut self, id: &str, kind: WindowType) -> bool {
        self.edit_in_place(id, |window| window.kind = kind)
    }

    /// Changes priority and moves the window to that priority's lane.
    pub fn change_priority(&mut self, id: &str, priority: Priority) -> bool {
        self.edit_in_place(id, |window| window.reprioritize(priority))
    }

    /// Replaces a window wholesale (the editor's save action).
    ///
    /// Returns `false` and keeps the stored record when `window` is unknown
    /// or fails validation.
    pub fn edit_window(&mut self, window: WindowRecord) -> bool {
        self.repo.update_window(window)
    }

    pub fn create_window(&mut self, draft: WindowDraft) -> WindowRecord {
        let window = self.repo.create_window(draft);
        info!("event=window_created module=sequence status=ok id={}", window.id);
        window
    }

    pub fn delete_window(&mut self, id: &str) -> bool {
        let deleted = self.repo.delete_window(id);
        if deleted {
            info!("event=window_deleted module=sequence status=ok id={id}");
        }
        deleted
    }

    fn edit_in_place(&mut self, id: &str, edit: impl FnOnce(&mut WindowRecord)) -> bool {
        let Some(mut window) = self.repo.get_window(id).cloned() else {
            return false;
        };
        edit(&mut window);
        self.repo.update_window(window)
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        let mut windows = self.repo.list_windows().to_vec();
        windows.swap(a, b);
        self.repo.replace_windows(windows);
    }
}
