//! Real-Time Board Events
//!
//! Per-board WebSocket subscription. Remote task moves are reconciled into
//! the store with the same transformation the optimistic path uses, so a
//! repeated or already-applied event is a no-op. Echoes of this client's
//! own moves are dropped by origin id. There is no sequence numbering:
//! near-simultaneous moves settle last-applied-wins, and anything the local
//! cache cannot reconcile falls back to a full board re-fetch.

use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

use crate::context::AppContext;
use crate::models::Task;
use crate::store::{
    store_apply_remote_move, store_remove_task, store_upsert_task, BoardStore, RemoteApply,
};

/// Events published on a board's channel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    TaskMoved {
        task_id: u32,
        destination_list_id: u32,
        destination_position: i32,
        /// Client that initiated the move
        origin: String,
    },
    TaskCreated {
        task: Task,
    },
    TaskDeleted {
        task_id: u32,
    },
}

/// Identifier for this client instance, attached to outgoing moves so the
/// broadcast receiver can recognize its own echoes
pub fn generate_client_id() -> String {
    let mut id = String::from("web");
    for _ in 0..4 {
        id.push_str(&format!("-{:04x}", (js_sys::Math::random() * 65536.0) as u32));
    }
    id
}

/// Open the event stream for a board. Returns the socket so the caller can
/// close it when switching boards.
pub fn connect_board_events(
    board_id: u32,
    client_id: String,
    store: BoardStore,
    ctx: AppContext,
) -> Result<WebSocket, String> {
    let url = events_url(board_id)?;
    let ws = WebSocket::new(&url).map_err(|e| format!("WebSocket open failed: {:?}", e))?;

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let Some(text) = ev.data().as_string() else {
            return;
        };
        match serde_json::from_str::<BoardEvent>(&text) {
            Ok(event) => handle_event(event, &client_id, &store, &ctx),
            Err(e) => {
                web_sys::console::warn_1(&format!("[WS] Undecodable event: {}", e).into());
            }
        }
    });
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    Ok(ws)
}

fn events_url(board_id: u32) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let location = window.location();
    let protocol = location.protocol().map_err(|_| "no protocol".to_string())?;
    let host = location.host().map_err(|_| "no host".to_string())?;
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    Ok(format!("{}://{}/api/boards/{}/events", scheme, host, board_id))
}

fn handle_event(event: BoardEvent, client_id: &str, store: &BoardStore, ctx: &AppContext) {
    match event {
        BoardEvent::TaskMoved {
            task_id,
            destination_list_id,
            destination_position,
            origin,
        } => {
            if origin == client_id {
                // Our own move echoed back; local state already reflects it
                return;
            }
            match store_apply_remote_move(store, task_id, destination_list_id, destination_position)
            {
                RemoteApply::Changed | RemoteApply::Unchanged => {}
                RemoteApply::UnknownTask => {
                    web_sys::console::log_1(
                        &format!("[WS] Unknown task {}, refetching board", task_id).into(),
                    );
                    ctx.reload();
                }
            }
        }
        BoardEvent::TaskCreated { task } => {
            store_upsert_task(store, task);
        }
        BoardEvent::TaskDeleted { task_id } => {
            store_remove_task(store, task_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_task_moved() {
        let json = r#"{"type":"task_moved","task_id":7,"destination_list_id":3,"destination_position":0,"origin":"web-ab12"}"#;

        let event: BoardEvent = serde_json::from_str(json).expect("decode failed");

        assert_eq!(
            event,
            BoardEvent::TaskMoved {
                task_id: 7,
                destination_list_id: 3,
                destination_position: 0,
                origin: "web-ab12".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_task_created() {
        let json = r#"{"type":"task_created","task":{"id":5,"list_id":2,"title":"Ship it","position":1}}"#;

        let event: BoardEvent = serde_json::from_str(json).expect("decode failed");

        match event {
            BoardEvent::TaskCreated { task } => {
                assert_eq!(task.id, 5);
                assert_eq!(task.list_id, 2);
                assert_eq!(task.position, 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        // Servers may attach fields this client does not consume
        let json = r#"{"type":"task_deleted","task_id":9,"origin":"web-ff00","board_id":1}"#;

        let event: BoardEvent = serde_json::from_str(json).expect("decode failed");

        assert_eq!(event, BoardEvent::TaskDeleted { task_id: 9 });
    }

    #[test]
    fn test_unknown_event_type_is_an_error() {
        let json = r#"{"type":"board_renamed","title":"Q3"}"#;

        assert!(serde_json::from_str::<BoardEvent>(json).is_err());
    }
}
