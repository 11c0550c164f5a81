//! Window store contracts and implementations.
//!
//! # Responsibility
//! - Own the ordered window collection.
//! - Expose the only mutation paths other components may use.
//!
//! # Invariants
//! - Store operations never fail; missing ids are no-ops.
//! - Store writes never reorder unless the caller replaces the sequence.

pub mod window_repo;
