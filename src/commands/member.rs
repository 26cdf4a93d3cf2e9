//! Board Member Commands
//!
//! Frontend bindings for member search and invitation.

use serde::Serialize;

use crate::models::{BoardUser, Role};

use super::{get_json, post_empty};

#[derive(Serialize)]
struct InviteArgs {
    user_id: u32,
    role: Role,
}

/// Search users by name fragment. Callers debounce; each invocation maps to
/// exactly one request.
pub async fn search_users(query: &str) -> Result<Vec<BoardUser>, String> {
    let encoded = String::from(js_sys::encode_uri_component(query));
    get_json(&format!("/api/users/search?q={}", encoded)).await
}

/// Invite a user to the board with the given role
pub async fn invite_member(board_id: u32, user_id: u32, role: Role) -> Result<(), String> {
    post_empty(
        &format!("/api/boards/{}/members", board_id),
        &InviteArgs { user_id, role },
    )
    .await
}
