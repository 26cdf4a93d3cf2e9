//! Task Commands
//!
//! Frontend bindings for task-related API calls.

use serde::Serialize;

use crate::models::Task;

use super::{delete_empty, patch_empty, post_json};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub list_id: u32,
}

#[derive(Serialize)]
struct MoveTaskArgs<'a> {
    destination_list_id: u32,
    destination_position: i32,
    /// Identifies the sending client so its own broadcast echo can be dropped
    origin: &'a str,
}

// ========================
// Commands
// ========================

pub async fn create_task(board_id: u32, args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    post_json(&format!("/api/boards/{}/tasks", board_id), args).await
}

/// Persist the authoritative move for a task. Issued at most once per drag
/// gesture, after the local state already reflects the move.
pub async fn move_task(
    task_id: u32,
    destination_list_id: u32,
    destination_position: i32,
    origin: &str,
) -> Result<(), String> {
    patch_empty(
        &format!("/api/tasks/{}/move", task_id),
        &MoveTaskArgs {
            destination_list_id,
            destination_position,
            origin,
        },
    )
    .await
}

pub async fn delete_task(task_id: u32) -> Result<(), String> {
    delete_empty(&format!("/api/tasks/{}", task_id)).await
}
