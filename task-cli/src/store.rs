use crate::TaskError;
use crate::task::Task;
use log::debug;
use std::fs;
use std::io::ErrorKind;

/// Reads the whole task collection from `file`.
///
/// A missing or empty file is an empty collection, not an error; a file that
/// exists but does not parse is a [`TaskError::Parse`].
pub fn load(file: &str) -> Result<Vec<Task>, TaskError> {
    let contents = match fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(TaskError::Io(err)),
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(&contents)?;
    debug!("loaded {} tasks from {file}", tasks.len());
    Ok(tasks)
}

/// Replaces the contents of `file` with the full serialized collection.
pub fn save(file: &str, tasks: &[Task]) -> Result<(), TaskError> {
    let json = serde_json::to_string_pretty(tasks)?;
    fs::write(file, json)?;
    debug!("saved {} tasks to {file}", tasks.len());
    Ok(())
}
