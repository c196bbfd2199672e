//! Core domain logic for taskdeck.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskStatus, normalize_title, now_epoch_ms};
pub use repo::task_repo::{
    DueDatePatch, InMemoryTaskRepository, TaskFilter, TaskPatch, TaskRepository,
};
pub use service::task_service::{NewTaskRequest, ServiceResult, TaskService, TaskServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
