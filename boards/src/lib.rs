//! In-memory to-do board model and its reducer.
//!
//! DESIGN
//! ======
//! `BoardStore` owns every board, and every board owns its tasks. All mutation
//! goes through store operations so a failed call never leaves partial state.
//! The presentation layer talks to the store only through [`dispatch`], which
//! turns an explicit [`BoardAction`] into a list of [`BoardEffect`] values to
//! render.
//!
//! This crate is UI-framework agnostic; effects are plain serde values.

pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;

pub use dispatch::{BoardAction, BoardEffect, dispatch};
pub use error::BoardError;
pub use model::{Board, BoardId, Task, TaskId};
pub use store::BoardStore;
