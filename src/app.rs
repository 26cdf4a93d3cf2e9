//! Boardline Frontend App
//!
//! Main application component: board tabs, the drag-and-drop board view,
//! and the member invite panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BoardTabBar, BoardView, MemberSearch};
use crate::context::AppContext;
use crate::realtime;
use crate::store::{store_replace_board, store_set_boards, BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    let (current_board, set_current_board) = signal(1u32); // Default board ID = 1
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (error_message, set_error_message) = signal(None::<String>);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        current_board,
        (error_message, set_error_message),
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let client_id = StoredValue::new(realtime::generate_client_id());
    let socket = StoredValue::new_local(None::<web_sys::WebSocket>);

    // Load boards on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_boards().await {
                Ok(boards) => store_set_boards(&store, boards),
                Err(e) => {
                    web_sys::console::warn_1(&format!("[APP] Loading boards failed: {}", e).into());
                }
            }
        });
    });

    // Load the board when it or the reload trigger changes. This is also the
    // recovery path: any failure elsewhere bumps the trigger and the local
    // cache is replaced wholesale with server truth.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let board_id = current_board.get();
        web_sys::console::log_1(&format!("[APP] Loading board {}, trigger={}", board_id, trigger).into());
        spawn_local(async move {
            match commands::fetch_board(board_id).await {
                Ok(detail) => store_replace_board(&store, detail),
                Err(e) => {
                    web_sys::console::warn_1(&format!("[APP] Loading board failed: {}", e).into());
                    ctx.notify_error(format!("Could not load board: {}", e));
                }
            }
        });
    });

    // (Re)subscribe to the board's event stream when switching boards
    Effect::new(move |_| {
        let board_id = current_board.get();
        socket.update_value(|slot| {
            if let Some(previous) = slot.take() {
                let _ = previous.close();
            }
            match realtime::connect_board_events(board_id, client_id.get_value(), store, ctx) {
                Ok(ws) => *slot = Some(ws),
                Err(e) => web_sys::console::warn_1(&format!("[WS] {}", e).into()),
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <BoardTabBar
                    current_board=current_board
                    set_current_board=set_current_board
                />

                <h1>"Boardline"</h1>

                {move || error_message.get().map(|message| view! {
                    <div class="error-banner" on:click=move |_| ctx.clear_error()>
                        {message}
                    </div>
                })}

                <BoardView client_id=client_id />

                <p class="task-count">{move || format!("{} tasks", store.tasks().get().len())}</p>
            </main>

            <aside class="side-panel">
                <MemberSearch />
            </aside>
        </div>
    }
}
