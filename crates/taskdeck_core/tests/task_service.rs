use std::collections::HashSet;
use taskdeck_core::{
    DueDatePatch, InMemoryTaskRepository, NewTaskRequest, TaskFilter, TaskPatch, TaskService,
    TaskServiceError, TaskStatus,
};
use uuid::Uuid;

fn new_service() -> TaskService<InMemoryTaskRepository> {
    TaskService::new(InMemoryTaskRepository::new())
}

fn request(title: &str) -> NewTaskRequest {
    NewTaskRequest {
        title: title.to_string(),
        due_date: None,
    }
}

#[test]
fn create_task_trims_title_and_defaults_to_open() {
    let mut service = new_service();

    let task = service.create_task(&request("  Trim me  ")).unwrap();

    assert_eq!(task.title, "Trim me");
    assert_eq!(task.status, TaskStatus::Open);
    assert!(task.created_at > 0);
    assert_eq!(task.due_date, None);
}

#[test]
fn create_task_copies_due_date_when_provided() {
    let mut service = new_service();
    let input = NewTaskRequest {
        title: "with deadline".to_string(),
        due_date: Some(1_700_000_360_000),
    };

    let task = service.create_task(&input).unwrap();
    assert_eq!(task.due_date, Some(1_700_000_360_000));
}

#[test]
fn create_task_rejects_blank_title_without_mutation() {
    let mut service = new_service();

    let err = service.create_task(&request("   ")).unwrap_err();

    assert_eq!(err, TaskServiceError::TitleRequired);
    assert_eq!(err.to_string(), "Title is required");
    assert!(service.list_tasks(&TaskFilter::default()).is_empty());
}

#[test]
fn created_ids_are_fresh_and_distinct() {
    let mut service = new_service();

    let mut ids = HashSet::new();
    for index in 0..16 {
        let task = service.create_task(&request(&format!("task {index}"))).unwrap();
        assert!(ids.insert(task.id), "id {} was reused", task.id);
    }
}

#[test]
fn get_task_returns_created_task() {
    let mut service = new_service();
    let created = service.create_task(&request("A")).unwrap();

    let fetched = service.get_task(created.id).unwrap();
    assert_eq!(fetched.title, "A");
    assert_eq!(fetched, created);
}

#[test]
fn get_unknown_task_fails_not_found() {
    let service = new_service();

    let err = service.get_task(Uuid::new_v4()).unwrap_err();
    assert_eq!(err, TaskServiceError::NotFound);
    assert_eq!(err.to_string(), "Task not found");
}

#[test]
fn update_status_changes_only_status() {
    let mut service = new_service();
    let input = NewTaskRequest {
        title: "stable".to_string(),
        due_date: Some(1_700_000_360_000),
    };
    let created = service.create_task(&input).unwrap();

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };
    let updated = service.update_task(created.id, &patch).unwrap();

    assert_eq!(updated.status, TaskStatus::Done);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.due_date, created.due_date);
}

#[test]
fn update_rejects_blank_title_before_touching_storage() {
    let mut service = new_service();
    let created = service.create_task(&request("original")).unwrap();

    let patch = TaskPatch {
        title: Some("  ".to_string()),
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };
    let err = service.update_task(created.id, &patch).unwrap_err();

    assert_eq!(err, TaskServiceError::TitleEmpty);
    assert_eq!(err.to_string(), "Title cannot be empty");
    // The rejected patch must not have been partially applied.
    let current = service.get_task(created.id).unwrap();
    assert_eq!(current.title, "original");
    assert_eq!(current.status, TaskStatus::Open);
}

#[test]
fn update_clears_due_date_with_explicit_clear() {
    let mut service = new_service();
    let input = NewTaskRequest {
        title: "deadline".to_string(),
        due_date: Some(1_700_000_360_000),
    };
    let created = service.create_task(&input).unwrap();

    let clear = TaskPatch {
        due_date: DueDatePatch::Clear,
        ..TaskPatch::default()
    };
    let updated = service.update_task(created.id, &clear).unwrap();
    assert_eq!(updated.due_date, None);
}

#[test]
fn update_with_empty_patch_leaves_due_date_unchanged() {
    let mut service = new_service();
    let input = NewTaskRequest {
        title: "deadline".to_string(),
        due_date: Some(1_700_000_360_000),
    };
    let created = service.create_task(&input).unwrap();

    let updated = service.update_task(created.id, &TaskPatch::default()).unwrap();
    assert_eq!(updated.due_date, Some(1_700_000_360_000));
}

#[test]
fn update_unknown_task_fails_not_found() {
    let mut service = new_service();
    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };

    let err = service.update_task(Uuid::new_v4(), &patch).unwrap_err();
    assert_eq!(err, TaskServiceError::NotFound);
}

#[test]
fn delete_then_get_fails_and_second_delete_fails() {
    let mut service = new_service();
    let created = service.create_task(&request("short lived")).unwrap();

    service.delete_task(created.id).unwrap();

    let get_err = service.get_task(created.id).unwrap_err();
    assert_eq!(get_err, TaskServiceError::NotFound);

    let delete_err = service.delete_task(created.id).unwrap_err();
    assert_eq!(delete_err, TaskServiceError::NotFound);
    assert_eq!(delete_err.to_string(), "Task not found");
}

#[test]
fn list_tasks_filters_by_status_and_search() {
    let mut service = new_service();
    let ship = service.create_task(&request("Ship taskdeck demo")).unwrap();
    let docs = service.create_task(&request("Write docs")).unwrap();
    let done_patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..TaskPatch::default()
    };
    service.update_task(docs.id, &done_patch).unwrap();

    let open_filter = TaskFilter {
        status: Some(TaskStatus::Open),
        ..TaskFilter::default()
    };
    let open = service.list_tasks(&open_filter);
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, ship.id);

    let search_filter = TaskFilter {
        search: Some("ship".to_string()),
        ..TaskFilter::default()
    };
    let matches = service.list_tasks(&search_filter);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, ship.id);

    let everything = service.list_tasks(&TaskFilter::default());
    assert_eq!(everything.len(), 2);
}
