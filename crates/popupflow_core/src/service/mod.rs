//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into editor-level operations.
//! - Keep the UI shell decoupled from store details.

pub mod sequence_service;
