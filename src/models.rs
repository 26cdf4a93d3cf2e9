//! Frontend Models
//!
//! Data structures matching the server's wire format.

use serde::{Deserialize, Serialize};

/// Board data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub title: String,
}

/// List data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: u32,
    pub board_id: u32,
    pub title: String,
    pub position: i32,
}

/// Task data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub list_id: u32,
    pub title: String,
    pub position: i32,
}

/// Full board snapshot returned by the server: the authoritative state the
/// client caches and resynchronizes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDetail {
    pub board: Board,
    pub lists: Vec<TaskList>,
    pub tasks: Vec<Task>,
}

/// User data returned by member search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardUser {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Membership role on a board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    Observer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Observer => "observer",
        }
    }

    pub fn parse(value: &str) -> Role {
        match value {
            "admin" => Role::Admin,
            "observer" => Role::Observer,
            _ => Role::Member,
        }
    }
}
