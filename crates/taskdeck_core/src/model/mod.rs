//! Domain model for task tracking.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every domain object is identified by a stable `TaskId`.
//! - Titles are stored trimmed and non-empty.

pub mod task;
