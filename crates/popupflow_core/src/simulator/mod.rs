//! Game screen simulation.
//!
//! # Responsibility
//! - Pick the windows each game stage presents.
//! - Track which presented windows are still on screen.

pub mod presentation;
pub mod stage;
