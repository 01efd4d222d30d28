use crate::TaskError;
use crate::store;
use crate::task::{Status, Task};
use chrono::Utc;
use log::debug;

const EMPTY_DESCRIPTION: &str = "task description is required";
const EMPTY_FILENAME: &str = "filename cannot be empty";

/// What a list operation produced, so the caller can tell an empty
/// collection apart from a filter that matched nothing.
#[derive(Debug, PartialEq)]
pub enum ListOutcome {
    /// The collection holds no tasks at all.
    Empty,
    /// The collection is non-empty but no task has the requested status.
    NoMatches(Status),
    /// Matching tasks, in collection order.
    Tasks(Vec<Task>),
}

/// Appends a new `todo` task and returns its ID.
///
/// The ID is the last task's ID plus one (1 for an empty collection), not
/// the maximum over all tasks; after deleting the last task a new add can
/// reuse its ID.
pub fn add_task(file: &str, description: &str) -> Result<u32, TaskError> {
    if description.is_empty() {
        return Err(TaskError::Validation(EMPTY_DESCRIPTION));
    }
    if file.is_empty() {
        return Err(TaskError::Validation(EMPTY_FILENAME));
    }

    let mut tasks = store::load(file)?;
    let id = tasks.last().map_or(1, |last| last.id + 1);
    tasks.push(Task::new(id, description.to_string()));
    store::save(file, &tasks)?;
    debug!("added task {id}");
    Ok(id)
}

/// Loads the collection and applies the optional status filter.
pub fn list_tasks(file: &str, filter: Option<Status>) -> Result<ListOutcome, TaskError> {
    if file.is_empty() {
        return Err(TaskError::Validation(EMPTY_FILENAME));
    }

    let tasks = store::load(file)?;
    if tasks.is_empty() {
        return Ok(ListOutcome::Empty);
    }

    let Some(status) = filter else {
        return Ok(ListOutcome::Tasks(tasks));
    };

    let matching: Vec<Task> = tasks.into_iter().filter(|t| t.status == status).collect();
    if matching.is_empty() {
        Ok(ListOutcome::NoMatches(status))
    } else {
        Ok(ListOutcome::Tasks(matching))
    }
}

/// Replaces a task's description and stamps `updated_at`.
pub fn update_task(file: &str, id: u32, new_description: &str) -> Result<(), TaskError> {
    if new_description.is_empty() {
        return Err(TaskError::Validation(EMPTY_DESCRIPTION));
    }
    if file.is_empty() {
        return Err(TaskError::Validation(EMPTY_FILENAME));
    }

    let mut tasks = store::load(file)?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TaskError::NotFound(id))?;
    task.description = new_description.to_string();
    task.updated_at = Some(Utc::now());
    store::save(file, &tasks)?;
    debug!("updated task {id}");
    Ok(())
}

pub fn mark_in_progress(file: &str, id: u32) -> Result<(), TaskError> {
    set_status(file, id, Status::InProgress)
}

pub fn mark_done(file: &str, id: u32) -> Result<(), TaskError> {
    set_status(file, id, Status::Done)
}

// Status changes do not stamp `updated_at`; only description edits do.
fn set_status(file: &str, id: u32, status: Status) -> Result<(), TaskError> {
    let mut tasks = store::load(file)?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TaskError::NotFound(id))?;
    task.status = status;
    store::save(file, &tasks)?;
    debug!("marked task {id} as {status}");
    Ok(())
}

/// Removes a single task, preserving the order of the rest.
pub fn delete_task(file: &str, id: u32) -> Result<(), TaskError> {
    let mut tasks = store::load(file)?;
    let index = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(TaskError::NotFound(id))?;
    tasks.remove(index);
    store::save(file, &tasks)?;
    debug!("deleted task {id}");
    Ok(())
}
