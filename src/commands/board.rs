//! Board Commands
//!
//! Frontend bindings for board-level API calls.

use crate::models::{Board, BoardDetail};

use super::get_json;

/// Boards visible to the current user
pub async fn list_boards() -> Result<Vec<Board>, String> {
    get_json("/api/boards").await
}

/// Full board snapshot: lists and tasks with authoritative positions.
/// Used for the initial load and as the recovery path after any failure.
pub async fn fetch_board(board_id: u32) -> Result<BoardDetail, String> {
    get_json(&format!("/api/boards/{}", board_id)).await
}
