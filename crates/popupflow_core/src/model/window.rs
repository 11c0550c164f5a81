//! Window record domain model.
//!
//! # Responsibility
//! - Define the canonical popup-window record shared by every view.
//! - Provide parsing/printing of the wire names used by the UI shell.
//!
//! # Invariants
//! - `id` is stable across reorders and never derived from position.
//! - `content` is never blank for a validated record.
//! - Lane remapping by priority happens only in explicit edit flows.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Stable window identifier, kept as the numeric string the UI shell uses.
pub type WindowId = String;

/// Lobby lane number a window is displayed on.
pub type LineNumber = u32;

/// Lanes the lobby exposes as entry points.
pub const LOBBY_LANES: RangeInclusive<LineNumber> = 1..=5;

/// Numeric ids at or below this value belong to the main screen placement;
/// ids above it belong to the level exit placement.
pub const PLACEMENT_ID_THRESHOLD: u64 = 50;

/// Category of a popup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    Reward,
    Offer,
    Tutorial,
    Event,
    System,
    Progress,
}

impl WindowType {
    /// All types in the order the editor lists them.
    pub const ALL: [WindowType; 6] = [
        WindowType::Reward,
        WindowType::Offer,
        WindowType::Tutorial,
        WindowType::Event,
        WindowType::System,
        WindowType::Progress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reward => "reward",
            Self::Offer => "offer",
            Self::Tutorial => "tutorial",
            Self::Event => "event",
            Self::System => "system",
            Self::Progress => "progress",
        }
    }
}

impl Display for WindowType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowType {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseValueError::new("type", value))
    }
}

/// Display priority of a popup window.
///
/// Ordering follows rank: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities from highest to lowest.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Sort rank used by priority-ordered views (0 shows first).
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Lane a window is moved to when its priority is changed in the editor.
    pub fn canonical_line(self) -> LineNumber {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Inverse of [`Priority::canonical_line`]; lanes 4 and 5 carry no priority.
    pub fn for_line(line: LineNumber) -> Option<Self> {
        match line {
            1 => Some(Self::High),
            2 => Some(Self::Medium),
            3 => Some(Self::Low),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| ParseValueError::new("priority", value))
    }
}

/// Logical screen a window is shown on, derived from its numeric id.
///
/// This is not stored on the record: historically windows for the level exit
/// were given ids above [`PLACEMENT_ID_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Lobby / main screen windows.
    MainScreen,
    /// Windows shown when leaving a level.
    LevelExit,
}

impl Placement {
    /// Returns the placement for an id, or `None` when the id is not numeric.
    pub fn of_id(id: &str) -> Option<Self> {
        let numeric = numeric_id(id)?;
        if numeric <= PLACEMENT_ID_THRESHOLD {
            Some(Self::MainScreen)
        } else {
            Some(Self::LevelExit)
        }
    }
}

/// Parses a window id as an unsigned integer.
pub fn numeric_id(id: &str) -> Option<u64> {
    id.trim().parse::<u64>().ok()
}

/// Unknown wire name for an enum-valued field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    pub field: &'static str,
    pub value: String,
}

impl ParseValueError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for ParseValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.field, self.value)
    }
}

impl Error for ParseValueError {}

/// Validation failures for [`WindowRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowValidationError {
    EmptyId,
    EmptyContent { id: WindowId },
}

impl Display for WindowValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "window id must not be blank"),
            Self::EmptyContent { id } => write!(f, "window `{id}` content must not be blank"),
        }
    }
}

impl Error for WindowValidationError {}

/// Popup window metadata entry.
///
/// Serialized with the field names the front-end expects
/// (`id, content, type, priority, line, description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowRecordWire")]
pub struct WindowRecord {
    pub id: WindowId,
    /// Display title.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: WindowType,
    pub priority: Priority,
    /// Lobby lane; only lanes 1..=3 have a canonical priority meaning.
    pub line: LineNumber,
    pub description: String,
}

impl WindowRecord {
    pub fn new(
        id: impl Into<WindowId>,
        content: impl Into<String>,
        kind: WindowType,
        priority: Priority,
        line: LineNumber,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            kind,
            priority,
            line,
            description: description.into(),
        }
    }

    /// Checks record-local invariants.
    ///
    /// Cross-record rules (id uniqueness) belong to the store.
    pub fn validate(&self) -> Result<(), WindowValidationError> {
        if self.id.trim().is_empty() {
            return Err(WindowValidationError::EmptyId);
        }
        if self.content.trim().is_empty() {
            return Err(WindowValidationError::EmptyContent {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Derived placement, see [`Placement::of_id`].
    pub fn placement(&self) -> Option<Placement> {
        Placement::of_id(&self.id)
    }

    pub fn numeric_id(&self) -> Option<u64> {
        numeric_id(&self.id)
    }

    /// Sets priority and moves the record to the priority's canonical lane.
    pub fn reprioritize(&mut self, priority: Priority) {
        self.priority = priority;
        self.line = priority.canonical_line();
    }
}

#[derive(Deserialize)]
struct WindowRecordWire {
    id: WindowId,
    content: String,
    #[serde(rename = "type")]
    kind: WindowType,
    priority: Priority,
    line: LineNumber,
    #[serde(default)]
    description: String,
}

impl TryFrom<WindowRecordWire> for WindowRecord {
    type Error = WindowValidationError;

    fn try_from(wire: WindowRecordWire) -> Result<Self, Self::Error> {
        let record = Self {
            id: wire.id,
            content: wire.content,
            kind: wire.kind,
            priority: wire.priority,
            line: wire.line,
            description: wire.description,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Partial record used when creating a window; unset fields take editor
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowDraft {
    pub content: Option<String>,
    pub kind: Option<WindowType>,
    pub priority: Option<Priority>,
    pub line: Option<LineNumber>,
    pub description: Option<String>,
}

impl WindowDraft {
    pub const DEFAULT_CONTENT: &'static str = "Новое окно";
    pub const DEFAULT_DESCRIPTION: &'static str = "Описание нового окна";
    pub const DEFAULT_TYPE: WindowType = WindowType::System;
    pub const DEFAULT_PRIORITY: Priority = Priority::Medium;
    pub const DEFAULT_LINE: LineNumber = 2;

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_kind(mut self, kind: WindowType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_line(mut self, line: LineNumber) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Materializes the draft under the given id; blank content falls back to
    /// [`Self::DEFAULT_CONTENT`].
    pub fn into_record(self, id: impl Into<WindowId>) -> WindowRecord {
        WindowRecord {
            id: id.into(),
            content: self
                .content
                .filter(|content| !content.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_CONTENT.to_string()),
            kind: self.kind.unwrap_or(Self::DEFAULT_TYPE),
            priority: self.priority.unwrap_or(Self::DEFAULT_PRIORITY),
            line: self.line.unwrap_or(Self::DEFAULT_LINE),
            description: self
                .description
                .unwrap_or_else(|| Self::DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{numeric_id, Placement, Priority, WindowType};

    #[test]
    fn placement_splits_on_threshold() {
        assert_eq!(Placement::of_id("50"), Some(Placement::MainScreen));
        assert_eq!(Placement::of_id("51"), Some(Placement::LevelExit));
        assert_eq!(Placement::of_id("abc"), None);
    }

    #[test]
    fn numeric_id_tolerates_surrounding_whitespace() {
        assert_eq!(numeric_id(" 7 "), Some(7));
        assert_eq!(numeric_id("-1"), None);
    }

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for kind in WindowType::ALL {
            assert_eq!(kind.as_str().parse::<WindowType>().unwrap(), kind);
        }
        for priority in Priority::ALL {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn canonical_lines_are_inverse_of_for_line() {
        for priority in Priority::ALL {
            assert_eq!(Priority::for_line(priority.canonical_line()), Some(priority));
        }
        assert_eq!(Priority::for_line(4), None);
    }
}
