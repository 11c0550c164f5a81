//! Core model and operations for popup window sequencing.
//! This crate is the single source of truth for window ordering invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod simulator;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::seed::seed_windows;
pub use model::window::{
    LineNumber, ParseValueError, Placement, Priority, WindowDraft, WindowId, WindowRecord,
    WindowType, WindowValidationError, LOBBY_LANES, PLACEMENT_ID_THRESHOLD,
};
pub use query::filter::{
    filter_windows, sort_by_priority, summarize, FilterChoice, FilterSummary, WindowFilter,
};
pub use query::group::{group_by_line, group_by_priority, lane_slots, LaneGroup, PriorityGroup};
pub use repo::window_repo::{next_window_id, InMemoryWindowRepository, WindowRepository};
pub use service::sequence_service::{MoveDirection, SequenceService};
pub use simulator::presentation::{LaneWalkthrough, Presentation};
pub use simulator::stage::{
    select_for_stage, stage_rules, SelectionRule, Stage, UnknownStageError,
};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
