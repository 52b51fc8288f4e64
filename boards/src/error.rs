use crate::model::{BoardId, TaskId};

/// Error returned by fallible [`BoardStore`](crate::BoardStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Board titles must be non-empty.
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    #[error("task {task_id} not found on board {board_id}")]
    TaskNotFound { board_id: BoardId, task_id: TaskId },
}

impl BoardError {
    /// Grepable code carried on alert effects.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "E_VALIDATION",
            Self::BoardNotFound(_) => "E_BOARD_NOT_FOUND",
            Self::TaskNotFound { .. } => "E_TASK_NOT_FOUND",
        }
    }
}
