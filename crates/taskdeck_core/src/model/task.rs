//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by repository and service.
//! - Provide constructors that fix identity and creation time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty and trimmed whenever a task exists.
//! - `status` is always a member of `TaskStatus`.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    Open,
    /// Work has started.
    InProgress,
    /// Completed successfully.
    Done,
}

/// Canonical record for one trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for lookup and auditing.
    pub id: TaskId,
    /// Non-empty trimmed display title.
    pub title: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Unix epoch milliseconds, fixed at creation and never mutated.
    pub created_at: i64,
    /// Optional deadline in epoch milliseconds.
    pub due_date: Option<i64>,
}

impl Task {
    /// Creates a new open task with a generated stable ID and the current
    /// creation time.
    ///
    /// # Invariants
    /// - `status` starts as `TaskStatus::Open`.
    /// - The caller passes an already-normalized title; see
    ///   [`normalize_title`].
    pub fn new(title: impl Into<String>, due_date: Option<i64>) -> Self {
        Self::with_parts(Uuid::new_v4(), title, now_epoch_ms(), due_date)
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by tests and import paths where identity already exists
    /// externally.
    pub fn with_parts(
        id: TaskId,
        title: impl Into<String>,
        created_at: i64,
        due_date: Option<i64>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::Open,
            created_at,
            due_date,
        }
    }
}

/// Trims a raw title and rejects blank input.
///
/// Returns `Some(trimmed)` for usable titles, `None` when the input is
/// empty or whitespace-only.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
