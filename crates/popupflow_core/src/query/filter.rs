//! Window filtering and priority ordering.
//!
//! # Responsibility
//! - Evaluate the editor's filter bar against a collection snapshot.
//! - Provide the priority-ordered view used by the lane emulator.
//!
//! # Invariants
//! - Filtering is stable and never reorders its input.
//! - Active predicates combine with logical AND.
//! - Priority ordering is a stable sort on rank only.

use crate::model::window::{LineNumber, Placement, Priority, WindowRecord, WindowType};
use std::str::FromStr;

/// Filter value coming from a UI select, where `"all"` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice<T> {
    All,
    Only(T),
}

impl<T> FilterChoice<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T: FromStr> FromStr for FilterChoice<T> {
    type Err = T::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.trim().parse().map(Self::Only)
    }
}

/// Filter specification; `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowFilter {
    /// Case-insensitive substring matched against content or description.
    pub search_term: Option<String>,
    pub kind: Option<WindowType>,
    pub priority: Option<Priority>,
    /// Exact lane match (the "entry" filter of the priority board).
    pub line: Option<LineNumber>,
    /// Main screen / level exit tab.
    pub placement: Option<Placement>,
}

impl WindowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
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

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Whether any user-facing filter is set.
    ///
    /// Placement is a tab rather than a filter, so it does not count.
    pub fn is_active(&self) -> bool {
        self.search_needle().is_some()
            || self.kind.is_some()
            || self.priority.is_some()
            || self.line.is_some()
    }

    /// Resets search, type, priority and lane; keeps the placement tab.
    pub fn clear(&mut self) {
        self.search_term = None;
        self.kind = None;
        self.priority = None;
        self.line = None;
    }

    /// Returns whether one record passes every active predicate.
    pub fn matches(&self, window: &WindowRecord) -> bool {
        self.matches_with_needle(window, self.search_needle().as_deref())
    }

    fn matches_with_needle(&self, window: &WindowRecord, needle: Option<&str>) -> bool {
        if let Some(placement) = self.placement {
            if window.placement() != Some(placement) {
                return false;
            }
        }
        if let Some(needle) = needle {
            if !contains_folded(&window.content, needle)
                && !contains_folded(&window.description, needle)
            {
                return false;
            }
        }
        if self.kind.is_some_and(|kind| window.kind != kind) {
            return false;
        }
        if self.priority.is_some_and(|priority| window.priority != priority) {
            return false;
        }
        if self.line.is_some_and(|line| window.line != line) {
            return false;
        }
        true
    }

    // Empty terms do not filter; whitespace-only terms still do.
    fn search_needle(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}

/// Counts shown next to the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub total: usize,
}

/// Returns the records matching `filter`, in input order.
pub fn filter_windows<'a>(
    windows: &'a [WindowRecord],
    filter: &WindowFilter,
) -> Vec<&'a WindowRecord> {
    let needle = filter.search_needle();
    windows
        .iter()
        .filter(|window| filter.matches_with_needle(window, needle.as_deref()))
        .collect()
}

/// Filters and reports how many records remain out of the total.
pub fn summarize(windows: &[WindowRecord], filter: &WindowFilter) -> FilterSummary {
    FilterSummary {
        shown: filter_windows(windows, filter).len(),
        total: windows.len(),
    }
}

/// Orders records by priority rank, keeping input order among equal ranks.
pub fn sort_by_priority<'a, I>(windows: I) -> Vec<&'a WindowRecord>
where
    I: IntoIterator<Item = &'a WindowRecord>,
{
    let mut sorted: Vec<&WindowRecord> = windows.into_iter().collect();
    sorted.sort_by_key(|window| window.priority.rank());
    sorted
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::{contains_folded, FilterChoice, WindowFilter};
    use crate::model::window::{Priority, WindowType};

    #[test]
    fn contains_folded_handles_cyrillic_case() {
        assert!(contains_folded("Сундук Звёзд", "звёзд"));
        assert!(!contains_folded("Покупки", "бонус"));
    }

    #[test]
    fn filter_choice_parses_all_and_values() {
        assert_eq!("all".parse::<FilterChoice<Priority>>().unwrap(), FilterChoice::All);
        assert_eq!(
            "offer".parse::<FilterChoice<WindowType>>().unwrap(),
            FilterChoice::Only(WindowType::Offer)
        );
        assert_eq!("3".parse::<FilterChoice<u32>>().unwrap().into_option(), Some(3));
        assert!("sometimes".parse::<FilterChoice<Priority>>().is_err());
    }

    #[test]
    fn empty_search_term_is_not_an_active_filter() {
        let filter = WindowFilter::new().with_search("");
        assert!(!filter.is_active());
        assert!(WindowFilter::new().with_search(" ").is_active());
    }
}
