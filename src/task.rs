//! Task model and the collection that owns it.

use std::fmt;

use crate::error::TaskError;

/// Stable task identifier. Never reused by a [`TaskStore`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Request to replace a task's title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTaskPayload {
    pub task_id: TaskId,
    pub task_new_title: String,
}

/// Ordered task collection; the single owner of every [`Task`].
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a task. Blank titles and titles already present are rejected.
    pub fn add(&mut self, title: &str) -> Result<TaskId, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.tasks.iter().any(|task| task.title == title) {
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, title));
        Ok(id)
    }

    /// Flips `done` and returns the new value.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let task = self.get_mut(id)?;
        task.done = !task.done;
        Ok(task.done)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::UnknownTask(id))?;
        Ok(self.tasks.remove(position))
    }

    /// Applies an edit verbatim; the title is not trimmed or validated.
    pub fn edit(&mut self, payload: EditTaskPayload) -> Result<(), TaskError> {
        let task = self.get_mut(payload.task_id)?;
        task.title = payload.task_new_title;
        Ok(())
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::UnknownTask(id))
    }
}
