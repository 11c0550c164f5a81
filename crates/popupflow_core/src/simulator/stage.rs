//! Game stage selection table.
//!
//! # Responsibility
//! - Map each named game stage to an ordered list of selection rules.
//! - Select the windows a stage presents from a collection snapshot.
//!
//! # Invariants
//! - Selection is deterministic for a given collection order.
//! - Rules run in table order; a window picked by an earlier rule is not
//!   picked again.

use crate::model::window::{numeric_id, Placement, Priority, WindowRecord, WindowType};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Point in the game flow at which popups are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Entering the lobby.
    Entry,
    /// Leaving a failed level.
    Exit1,
    /// Leaving a won level.
    Exit2,
    /// Returning to the lobby after the level summary.
    Exit3,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Entry, Stage::Exit1, Stage::Exit2, Stage::Exit3];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit1 => "exit-1",
            Self::Exit2 => "exit-2",
            Self::Exit3 => "exit-3",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStageError(pub String);

impl Display for UnknownStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown stage `{}`; expected entry|exit-1|exit-2|exit-3",
            self.0
        )
    }
}

impl Error for UnknownStageError {}

impl FromStr for Stage {
    type Err = UnknownStageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| UnknownStageError(value.to_string()))
    }
}

/// One selection step: keep matching windows in collection order, then take
/// at most `limit` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRule {
    pub placement: Placement,
    pub priority: Option<Priority>,
    /// Empty means any type.
    pub kinds: &'static [WindowType],
    /// Inclusive numeric id range.
    pub ids: Option<RangeInclusive<u64>>,
    pub limit: Option<usize>,
}

impl SelectionRule {
    const fn placement(placement: Placement) -> Self {
        Self {
            placement,
            priority: None,
            kinds: &[],
            ids: None,
            limit: None,
        }
    }

    const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    const fn kinds(mut self, kinds: &'static [WindowType]) -> Self {
        self.kinds = kinds;
        self
    }

    const fn ids(mut self, ids: RangeInclusive<u64>) -> Self {
        self.ids = Some(ids);
        self
    }

    const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, window: &WindowRecord) -> bool {
        if window.placement() != Some(self.placement) {
            return false;
        }
        if self.priority.is_some_and(|priority| window.priority != priority) {
            return false;
        }
        if !self.kinds.is_empty() && !self.kinds.contains(&window.kind) {
            return false;
        }
        if let Some(ids) = &self.ids {
            match numeric_id(&window.id) {
                Some(id) if ids.contains(&id) => {}
                _ => return false,
            }
        }
        true
    }
}

const ENTRY_RULES: &[SelectionRule] = &[SelectionRule::placement(Placement::MainScreen)
    .priority(Priority::High)
    .limit(3)];

const EXIT_1_RULES: &[SelectionRule] = &[
    SelectionRule::placement(Placement::LevelExit)
        .priority(Priority::High)
        .limit(2),
    SelectionRule::placement(Placement::MainScreen)
        .kinds(&[WindowType::Event])
        .ids(1..=10)
        .limit(2),
];

const EXIT_2_RULES: &[SelectionRule] = &[
    SelectionRule::placement(Placement::LevelExit)
        .priority(Priority::High)
        .limit(3),
    SelectionRule::placement(Placement::MainScreen)
        .kinds(&[WindowType::Progress])
        .ids(1..=20)
        .limit(3),
    SelectionRule::placement(Placement::MainScreen)
        .kinds(&[WindowType::Reward])
        .ids(10..=20)
        .limit(3),
];

const EXIT_3_RULES: &[SelectionRule] = &[
    SelectionRule::placement(Placement::LevelExit).limit(2),
    SelectionRule::placement(Placement::MainScreen)
        .kinds(&[WindowType::Offer])
        .limit(2),
];

/// Selection rules of a stage, in evaluation order.
pub fn stage_rules(stage: Stage) -> &'static [SelectionRule] {
    match stage {
        Stage::Entry => ENTRY_RULES,
        Stage::Exit1 => EXIT_1_RULES,
        Stage::Exit2 => EXIT_2_RULES,
        Stage::Exit3 => EXIT_3_RULES,
    }
}

/// Selects the windows a stage presents, in presentation order.
pub fn select_for_stage(windows: &[WindowRecord], stage: Stage) -> Vec<&WindowRecord> {
    let mut picked: HashSet<&str> = HashSet::new();
    let mut selection = Vec::new();

    for rule in stage_rules(stage) {
        let matches = windows
            .iter()
            .filter(|window| !picked.contains(window.id.as_str()) && rule.matches(window))
            .take(rule.limit.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();
        for window in matches {
            picked.insert(window.id.as_str());
            selection.push(window);
        }
    }

    selection
}
