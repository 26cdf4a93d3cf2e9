//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All task and
//! list mutation goes through the store_* commands below, so event handlers
//! never interleave partial updates.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::models::{Board, BoardDetail, Task, TaskList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Boards available to the current user
    pub boards: Vec<Board>,
    /// Lists of the loaded board
    pub lists: Vec<TaskList>,
    /// Tasks of the loaded board
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

/// Outcome of reconciling a remote move event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RemoteApply {
    Changed,
    /// Already at the target (our own optimistic edit, or a repeated event)
    Unchanged,
    /// The task is not in the local cache; only a re-fetch can reconcile
    UnknownTask,
}

// ========================
// Store Command Functions
// ========================

/// Replace the available boards
pub fn store_set_boards(store: &BoardStore, boards: Vec<Board>) {
    *store.boards().write() = boards;
}

/// Replace lists and tasks wholesale with a freshly fetched board snapshot
pub fn store_replace_board(store: &BoardStore, detail: BoardDetail) {
    *store.lists().write() = detail.lists;
    *store.tasks().write() = detail.tasks;
}

/// Apply a local move (optimistic drag-over or final drop); returns whether
/// anything changed
pub fn store_apply_move(store: &BoardStore, task_id: u32, dest_list_id: u32, dest_index: i32) -> bool {
    board::apply_move(&mut store.tasks().write(), task_id, dest_list_id, dest_index)
}

/// Apply a move broadcast by the server on behalf of another client
pub fn store_apply_remote_move(
    store: &BoardStore,
    task_id: u32,
    dest_list_id: u32,
    dest_index: i32,
) -> RemoteApply {
    let known = store
        .tasks()
        .read_untracked()
        .iter()
        .any(|t| t.id == task_id);
    if !known {
        return RemoteApply::UnknownTask;
    }
    if board::apply_move(&mut store.tasks().write(), task_id, dest_list_id, dest_index) {
        RemoteApply::Changed
    } else {
        RemoteApply::Unchanged
    }
}

/// Insert a task, or replace it if the id is already present
pub fn store_upsert_task(store: &BoardStore, task: Task) {
    let tasks_field = store.tasks();
    let mut tasks = tasks_field.write();
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &BoardStore, task_id: u32) {
    store.tasks().write().retain(|t| t.id != task_id);
}
