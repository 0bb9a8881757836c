// src/types.rs

//! Small shared aliases used across the crate.

/// Canonical pass name type.
pub type PassName = String;

/// Index of a pass inside a [`crate::dag::PassGraph`] arena.
///
/// Ids are assigned in registration order, starting at zero.
pub type PassId = usize;

/// Index of an execution queue, always in `0..queue_count`.
pub type QueueIndex = usize;
