//! Board reducer: turns user actions into store mutations plus render effects.
//!
//! DESIGN
//! ======
//! The presentation layer never touches the store directly. Each click,
//! keypress or prompt result becomes one `BoardAction`; `dispatch` applies it
//! and returns the `BoardEffect` list describing exactly what the view must
//! change. Rejected actions produce a single `Alert` and leave the store
//! untouched. Deleting something that is already gone produces no effect.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BoardError;
use crate::model::{Board, BoardId, Task, TaskId};
use crate::store::BoardStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BoardAction {
    /// Initial render of whatever the store already holds.
    Load,
    CreateBoard { title: String },
    DuplicateBoard { board_id: BoardId },
    /// `title` is `None` when the rename prompt was dismissed.
    RenameBoard {
        board_id: BoardId,
        #[serde(default)]
        title: Option<String>,
    },
    RemoveBoard { board_id: BoardId },
    AddTask { board_id: BoardId, name: String },
    ToggleTask { board_id: BoardId, task_id: TaskId },
    SetTaskCompleted { board_id: BoardId, task_id: TaskId, completed: bool },
    RemoveTask { board_id: BoardId, task_id: TaskId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum BoardEffect {
    RenderBoard { board: Board },
    RemoveBoard { board_id: BoardId },
    UpdateBoardTitle { board_id: BoardId, title: String },
    RenderTask { board_id: BoardId, task: Task },
    SetTaskCompleted { board_id: BoardId, task_id: TaskId, completed: bool },
    RemoveTask { board_id: BoardId, task_id: TaskId },
    Alert { code: String, message: String },
}

impl From<BoardError> for BoardEffect {
    fn from(error: BoardError) -> Self {
        Self::Alert { code: error.error_code().to_owned(), message: error.to_string() }
    }
}

/// Apply one action to the store and return the effects to render.
pub fn dispatch(store: &mut BoardStore, action: BoardAction) -> Vec<BoardEffect> {
    match apply(store, action) {
        Ok(effects) => effects,
        Err(error) => {
            warn!(code = error.error_code(), %error, "board action rejected");
            vec![error.into()]
        }
    }
}

fn apply(store: &mut BoardStore, action: BoardAction) -> Result<Vec<BoardEffect>, BoardError> {
    let effects = match action {
        BoardAction::Load => store
            .boards()
            .iter()
            .map(|board| BoardEffect::RenderBoard { board: board.clone() })
            .collect(),
        BoardAction::CreateBoard { title } => {
            let board = store.create_board(&title)?;
            vec![BoardEffect::RenderBoard { board: board.clone() }]
        }
        BoardAction::DuplicateBoard { board_id } => {
            let board = store.duplicate_board(board_id)?;
            vec![BoardEffect::RenderBoard { board: board.clone() }]
        }
        BoardAction::RenameBoard { board_id, title } => {
            let board = store.rename_board(board_id, title.as_deref().unwrap_or_default())?;
            vec![BoardEffect::UpdateBoardTitle { board_id, title: board.title.clone() }]
        }
        BoardAction::RemoveBoard { board_id } => store
            .remove_board(board_id)
            .map(|_| BoardEffect::RemoveBoard { board_id })
            .into_iter()
            .collect(),
        BoardAction::AddTask { board_id, name } => {
            let task = store.add_task(board_id, &name)?;
            vec![BoardEffect::RenderTask { board_id, task: task.clone() }]
        }
        BoardAction::ToggleTask { board_id, task_id } => {
            let completed = store.toggle_task(board_id, task_id)?;
            vec![BoardEffect::SetTaskCompleted { board_id, task_id, completed }]
        }
        BoardAction::SetTaskCompleted { board_id, task_id, completed } => {
            store.set_task_completed(board_id, task_id, completed)?;
            vec![BoardEffect::SetTaskCompleted { board_id, task_id, completed }]
        }
        BoardAction::RemoveTask { board_id, task_id } => store
            .remove_task(board_id, task_id)
            .map(|_| BoardEffect::RemoveTask { board_id, task_id })
            .into_iter()
            .collect(),
    };
    Ok(effects)
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
