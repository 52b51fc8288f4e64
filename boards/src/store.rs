//! Board store — the single owner of all boards and their tasks.
//!
//! ERROR HANDLING
//! ==============
//! Operations that target a specific board or task return `BoardError` when
//! the id is absent, except the two removals, which treat a missing id as a
//! no-op and return `None`. Every check runs before any mutation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BoardError;
use crate::model::{Board, BoardId, Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStore {
    boards: Vec<Board>,
}

impl BoardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Boards in display order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    fn board_mut(&mut self, board_id: BoardId) -> Result<&mut Board, BoardError> {
        self.boards
            .iter_mut()
            .find(|board| board.id == board_id)
            .ok_or(BoardError::BoardNotFound(board_id))
    }

    fn task_mut(&mut self, board_id: BoardId, task_id: TaskId) -> Result<&mut Task, BoardError> {
        self.board_mut(board_id)?
            .task_mut(task_id)
            .ok_or(BoardError::TaskNotFound { board_id, task_id })
    }

    #[must_use]
    pub fn next_board_id(&self) -> BoardId {
        self.boards.last().map_or(1, |board| board.id + 1)
    }

    // =========================================================================
    // BOARDS
    // =========================================================================

    /// Create an empty board at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] when `title` is empty.
    pub fn create_board(&mut self, title: &str) -> Result<&Board, BoardError> {
        let board = Board::new(self.next_board_id(), title)?;
        debug!(board_id = board.id, title = %board.title, "board created");
        Ok(self.push(board))
    }

    /// Append a copy of an existing board under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BoardNotFound`] when `board_id` is absent.
    pub fn duplicate_board(&mut self, board_id: BoardId) -> Result<&Board, BoardError> {
        let source = self.board(board_id).ok_or(BoardError::BoardNotFound(board_id))?;
        let copy = source.duplicate(self.next_board_id());
        debug!(source_id = board_id, board_id = copy.id, tasks = copy.tasks.len(), "board duplicated");
        Ok(self.push(copy))
    }

    /// Rename a board in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BoardNotFound`] when `board_id` is absent, then
    /// [`BoardError::EmptyTitle`] when `title` is empty.
    pub fn rename_board(&mut self, board_id: BoardId, title: &str) -> Result<&Board, BoardError> {
        let board = self.board_mut(board_id)?;
        board.set_title(title)?;
        debug!(board_id, title, "board renamed");
        Ok(board)
    }

    /// Remove a board and all its tasks. Absent ids are ignored.
    pub fn remove_board(&mut self, board_id: BoardId) -> Option<Board> {
        let index = self.boards.iter().position(|board| board.id == board_id)?;
        let board = self.boards.remove(index);
        debug!(board_id, tasks = board.tasks.len(), "board removed");
        Some(board)
    }

    fn push(&mut self, board: Board) -> &Board {
        self.boards.push(board);
        &self.boards[self.boards.len() - 1]
    }

    // =========================================================================
    // TASKS
    // =========================================================================

    /// Append a new incomplete task to a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BoardNotFound`] when `board_id` is absent.
    pub fn add_task(&mut self, board_id: BoardId, name: &str) -> Result<&Task, BoardError> {
        let board = self.board_mut(board_id)?;
        let task = board.add_task(name);
        debug!(board_id, task_id = task.id, "task added");
        Ok(task)
    }

    /// Flip a task's completion flag and return the new value.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when either id is absent.
    pub fn toggle_task(&mut self, board_id: BoardId, task_id: TaskId) -> Result<bool, BoardError> {
        let completed = self.task_mut(board_id, task_id)?.toggle();
        debug!(board_id, task_id, completed, "task toggled");
        Ok(completed)
    }

    /// Mark a task complete or undo it, the way the task checkbox reports it.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when either id is absent.
    pub fn set_task_completed(
        &mut self,
        board_id: BoardId,
        task_id: TaskId,
        completed: bool,
    ) -> Result<(), BoardError> {
        let task = self.task_mut(board_id, task_id)?;
        if completed {
            task.complete();
        } else {
            task.undo();
        }
        debug!(board_id, task_id, completed, "task completion set");
        Ok(())
    }

    /// Remove a task from its board. Absent ids are ignored.
    pub fn remove_task(&mut self, board_id: BoardId, task_id: TaskId) -> Option<Task> {
        let board = self.boards.iter_mut().find(|board| board.id == board_id)?;
        let task = board.remove_task(task_id)?;
        debug!(board_id, task_id, "task removed");
        Some(task)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
