//! Task use-case service.
//!
//! # Responsibility
//! - Validate input before any repository mutation.
//! - Translate repository absence into typed failure outcomes.
//!
//! # Invariants
//! - Service APIs never bypass validation to reach the repository.
//! - Expected failures are returned as `TaskServiceError`, never raised
//!   as panics.

use crate::model::task::{Task, TaskId, normalize_title};
use crate::repo::task_repo::{TaskFilter, TaskPatch, TaskRepository};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result alias used by all fallible task operations.
pub type ServiceResult<T> = Result<T, TaskServiceError>;

/// Domain failure for task use-cases.
///
/// The `Display` output is the caller-facing message and is part of the
/// contract; callers may surface it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Create input had an empty or whitespace-only title.
    TitleRequired,
    /// Update patch provided a title that trims to empty.
    TitleEmpty,
    /// No task exists under the requested ID.
    NotFound,
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "Title is required"),
            Self::TitleEmpty => write!(f, "Title cannot be empty"),
            Self::NotFound => write!(f, "Task not found"),
        }
    }
}

impl Error for TaskServiceError {}

/// Request model for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    /// Raw title; trimmed before storage.
    pub title: String,
    /// Optional deadline in epoch milliseconds.
    pub due_date: Option<i64>,
}

/// Use-case facade enforcing business rules above the repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new open task from raw input.
    ///
    /// # Contract
    /// - The title is trimmed; blank input fails with `TitleRequired` and
    ///   performs no mutation.
    /// - Assigns a fresh ID, `Open` status and the current creation time;
    ///   the due date is copied only when provided.
    pub fn create_task(&mut self, request: &NewTaskRequest) -> ServiceResult<Task> {
        let title = normalize_title(&request.title).ok_or(TaskServiceError::TitleRequired)?;
        let task = self.repo.create_task(Task::new(title, request.due_date));
        debug!("event=task_created module=service id={}", task.id);
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Contract
    /// - A patch title that trims to empty fails with `TitleEmpty` before
    ///   the repository is touched.
    /// - Unknown IDs fail with `NotFound`.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> ServiceResult<Task> {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(TaskServiceError::TitleEmpty);
            }
        }

        let updated = self
            .repo
            .update_task(id, patch)
            .ok_or(TaskServiceError::NotFound)?;
        debug!("event=task_updated module=service id={id}");
        Ok(updated)
    }

    /// Gets one task by stable ID.
    pub fn get_task(&self, id: TaskId) -> ServiceResult<Task> {
        self.repo.get_task(id).ok_or(TaskServiceError::NotFound)
    }

    /// Lists tasks using optional status/search filters. Never fails; an
    /// empty result is a valid outcome.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        self.repo.list_tasks(filter)
    }

    /// Deletes one task by stable ID.
    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<()> {
        if !self.repo.delete_task(id) {
            return Err(TaskServiceError::NotFound);
        }
        debug!("event=task_deleted module=service id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TaskServiceError;

    #[test]
    fn error_messages_are_part_of_the_contract() {
        assert_eq!(TaskServiceError::TitleRequired.to_string(), "Title is required");
        assert_eq!(TaskServiceError::TitleEmpty.to_string(), "Title cannot be empty");
        assert_eq!(TaskServiceError::NotFound.to_string(), "Task not found");
    }
}
