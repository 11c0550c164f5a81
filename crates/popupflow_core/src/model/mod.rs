//! Popup window domain model.
//!
//! # Responsibility
//! - Define the one record type every component works with.
//! - Hold the built-in seed collection.
//!
//! # Invariants
//! - Every window is identified by a stable string id.
//! - Collection order is meaningful and owned by the store, not the model.

pub mod seed;
pub mod window;
