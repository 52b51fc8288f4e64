//! Board and task records.
//!
//! Ids follow a "last element + 1" rule rather than a historical maximum: the
//! next id is derived from whatever sits at the end of the collection right
//! now, or 1 when it is empty. Because new entries are always appended, ids of
//! entries present at the same time stay ascending and unique, but removing the
//! last entry frees its id for the next insert.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

pub type BoardId = u32;
pub type TaskId = u32;

/// Suffix appended to the title of a duplicated board.
pub const DUPLICATE_SUFFIX: &str = "Copy";

// =============================================================================
// TASK
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
}

impl Task {
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), completed: false }
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }

    pub fn undo(&mut self) {
        self.completed = false;
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

// =============================================================================
// BOARD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    /// Insertion order is display order.
    pub tasks: Vec<Task>,
}

impl Board {
    /// Build an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] when `title` is empty.
    pub fn new(id: BoardId, title: impl Into<String>) -> Result<Self, BoardError> {
        let title = title.into();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        Ok(Self { id, title, tasks: Vec::new() })
    }

    /// Replace the title in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] when `title` is empty; the current
    /// title is kept.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), BoardError> {
        let title = title.into();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    /// Copy this board under a new id. Tasks are cloned with their ids and
    /// completion flags unchanged, so the copy shares task ids with the source.
    #[must_use]
    pub fn duplicate(&self, id: BoardId) -> Self {
        Self {
            id,
            title: format!("{} {DUPLICATE_SUFFIX}", self.title),
            tasks: self.tasks.clone(),
        }
    }

    #[must_use]
    pub fn next_task_id(&self) -> TaskId {
        self.tasks.last().map_or(1, |task| task.id + 1)
    }

    /// Append a new incomplete task and return a reference to it.
    pub fn add_task(&mut self, name: impl Into<String>) -> &Task {
        let task = Task::new(self.next_task_id(), name);
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    /// Remove the first task with `task_id`, if present.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == task_id)?;
        Some(self.tasks.remove(index))
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
