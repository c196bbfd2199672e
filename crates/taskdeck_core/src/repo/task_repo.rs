//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative task store; all mutations pass through it.
//! - Provide stable CRUD and filtered-listing APIs over that store.
//!
//! # Invariants
//! - Absence is reported through return values (`None`, `false`), never
//!   through errors: in-memory operations have no transport failure mode.
//! - Listing order is deterministic for repeated reads with no
//!   intervening mutation.

use crate::model::task::{Task, TaskId, TaskStatus, normalize_title};
use std::collections::HashMap;

/// Filter options for listing tasks.
///
/// Criteria are AND-ed when both are present; the default filter matches
/// every task.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Exact status match when set.
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring match on title when set.
    pub search: Option<String>,
}

/// Three-way due date change for partial updates.
///
/// A plain `Option` cannot distinguish "leave unchanged" from "clear", so
/// the distinction is a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueDatePatch {
    /// Keep the existing due date.
    #[default]
    Unchanged,
    /// Remove the due date.
    Clear,
    /// Replace the due date with this epoch-ms value.
    Set(i64),
}

/// Partial update applied to an existing task.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// Replacement title; values that trim to empty are ignored at this
    /// layer.
    pub title: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Due date change, defaulting to no change.
    pub due_date: DueDatePatch,
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Inserts a task keyed by its ID and returns the stored copy.
    ///
    /// The input is assumed fully formed and valid. An ID collision
    /// silently overwrites; avoiding collisions is the caller's job.
    fn create_task(&mut self, task: Task) -> Task;

    /// Merges a patch onto an existing task and returns the result.
    ///
    /// Returns `None` when no task exists under `id`. Merge rules:
    /// - `title`: replaced only by a non-blank trimmed value.
    /// - `status`: replaced when provided.
    /// - `due_date`: per [`DueDatePatch`].
    fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> Option<Task>;

    /// Gets one task by ID, `None` when absent.
    fn get_task(&self, id: TaskId) -> Option<Task>;

    /// Lists tasks matching the filter in a stable order.
    fn list_tasks(&self, filter: &TaskFilter) -> Vec<Task>;

    /// Removes one task by ID; returns whether an entry existed.
    fn delete_task(&mut self, id: TaskId) -> bool;
}

/// HashMap-backed task repository for single-process use.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create_task(&mut self, task: Task) -> Task {
        self.tasks.insert(task.id, task.clone());
        task
    }

    fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;

        // Blank patch titles keep the existing title; the service layer is
        // expected to reject them before they reach storage.
        if let Some(title) = patch.title.as_deref().and_then(normalize_title) {
            task.title = title;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        match patch.due_date {
            DueDatePatch::Unchanged => {}
            DueDatePatch::Clear => task.due_date = None,
            DueDatePatch::Set(epoch_ms) => task.due_date = Some(epoch_ms),
        }

        Some(task.clone())
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn list_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        let search = filter
            .search
            .as_deref()
            .map(|query| query.to_lowercase());

        let mut tasks: Vec<Task> = self
            .tasks
            .values()
            .filter(|task| filter.status.is_none_or(|status| task.status == status))
            .filter(|task| {
                search
                    .as_deref()
                    .is_none_or(|query| task.title.to_lowercase().contains(query))
            })
            .cloned()
            .collect();

        tasks.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        tasks
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }
}
