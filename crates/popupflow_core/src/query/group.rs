//! Lane and priority grouping of filtered windows.
//!
//! # Invariants
//! - Groups keep the relative order of their input.
//! - Lane groups are enumerated in ascending lane order.

use crate::model::window::{LineNumber, Priority, WindowRecord, LOBBY_LANES};
use std::collections::BTreeMap;

/// Records shown on one lobby lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneGroup<'a> {
    pub line: LineNumber,
    pub windows: Vec<&'a WindowRecord>,
}

impl LaneGroup<'_> {
    /// Priority label of the lane, if it has a canonical one.
    pub fn priority(&self) -> Option<Priority> {
        Priority::for_line(self.line)
    }
}

/// One column of the priority board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityGroup<'a> {
    pub priority: Priority,
    pub windows: Vec<&'a WindowRecord>,
}

/// Groups records by lane; only lanes with at least one record appear.
pub fn group_by_line<'a, I>(windows: I) -> BTreeMap<LineNumber, Vec<&'a WindowRecord>>
where
    I: IntoIterator<Item = &'a WindowRecord>,
{
    let mut groups: BTreeMap<LineNumber, Vec<&WindowRecord>> = BTreeMap::new();
    for window in windows {
        groups.entry(window.line).or_default().push(window);
    }
    groups
}

/// Returns one group per lobby lane `1..=5`, empty lanes included.
///
/// Records on lanes outside the lobby range are not part of any slot.
pub fn lane_slots<'a, I>(windows: I) -> Vec<LaneGroup<'a>>
where
    I: IntoIterator<Item = &'a WindowRecord>,
{
    let mut groups = group_by_line(windows);
    LOBBY_LANES
        .map(|line| LaneGroup {
            line,
            windows: groups.remove(&line).unwrap_or_default(),
        })
        .collect()
}

/// Splits records into high, medium and low columns; all three are returned.
pub fn group_by_priority<'a, I>(windows: I) -> Vec<PriorityGroup<'a>>
where
    I: IntoIterator<Item = &'a WindowRecord>,
{
    let mut columns: Vec<PriorityGroup<'a>> = Priority::ALL
        .into_iter()
        .map(|priority| PriorityGroup {
            priority,
            windows: Vec::new(),
        })
        .collect();
    for window in windows {
        columns[usize::from(window.priority.rank())].windows.push(window);
    }
    columns
}
