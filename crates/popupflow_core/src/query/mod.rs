//! Read-only projections over the window collection.
//!
//! # Responsibility
//! - Derive filtered, priority-ordered and grouped views for the UI shell.
//!
//! # Invariants
//! - Query functions are pure: they borrow a snapshot and never mutate it.

pub mod filter;
pub mod group;
