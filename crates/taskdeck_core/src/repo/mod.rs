//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate store details from service/business orchestration.
//!
//! # Invariants
//! - Repository reads signal absence semantically (`None`), not as an
//!   error condition.

pub mod task_repo;
