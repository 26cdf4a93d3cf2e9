//! Board View Component
//!
//! Renders a board's lists as columns with drag-and-drop between them.
//! Crossing a list boundary during a drag mutates the store optimistically;
//! the drop handler persists the final position and recovers from any
//! failure by re-fetching the whole board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::*;

use crate::board::{self, MoveIntent};
use crate::commands;
use crate::components::ListColumn;
use crate::context::AppContext;
use crate::store::{store_apply_move, use_board_store, BoardStateStoreFields};

/// Board view component with DnD support
#[component]
pub fn BoardView(client_id: StoredValue<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Origin of the gesture in flight, captured at mousedown
    let intent = StoredValue::new(None::<MoveIntent>);

    // Capture where the task started before any optimistic mutation
    let on_task_mousedown = Callback::new(move |task_id: u32| {
        let origin = {
            let tasks = store.tasks().read_untracked();
            board::locate_task(&tasks, task_id)
        };
        if let Some((list_id, position)) = origin {
            intent.set_value(Some(MoveIntent::new(task_id, list_id, position)));
        }
    });

    // Optimistic cross-list application while hovering. Same-list hovers do
    // nothing until the drop; re-entering the same target is a no-op.
    Effect::new(move |_| {
        let Some(target) = dnd.drop_target_read.get() else {
            return;
        };
        let Some(dragged) = dnd.dragging_id_read.get_untracked() else {
            return;
        };
        let resolved = {
            let lists = store.lists().read_untracked();
            let tasks = store.tasks().read_untracked();
            board::resolve_drop(&lists, &tasks, target)
        };
        let Some((dest_list, dest_index)) = resolved else {
            return;
        };
        let current_list = store
            .tasks()
            .read_untracked()
            .iter()
            .find(|t| t.id == dragged)
            .map(|t| t.list_id);
        if current_list != Some(dest_list) {
            if store_apply_move(&store, dragged, dest_list, dest_index) {
                intent.update_value(|slot| {
                    if let Some(gesture) = slot {
                        gesture.optimistic = true;
                    }
                });
            }
        }
    });

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let gesture = intent.get_value().filter(|g| g.task_id == dragged_id);
        intent.set_value(None);

        let resolved = target.and_then(|t| {
            let lists = store.lists().read_untracked();
            let tasks = store.tasks().read_untracked();
            board::resolve_drop(&lists, &tasks, t)
        });

        let Some((dest_list, dest_index)) = resolved else {
            // Released outside any target, or the target vanished mid-drag.
            // Without an optimistic mutation the drag had no effect; with
            // one, only server truth can untangle the local state.
            if gesture.is_some_and(|g| g.optimistic) {
                web_sys::console::log_1(&"[DND] Cancelled after optimistic move, refetching".into());
                ctx.reload();
            }
            return;
        };

        store_apply_move(&store, dragged_id, dest_list, dest_index);

        // The authoritative position is whatever the mutated store says
        let finish = {
            let tasks = store.tasks().read_untracked();
            board::locate_task(&tasks, dragged_id)
        };
        let Some((final_list, final_position)) = finish else {
            return;
        };

        if let Some(g) = gesture {
            if g.source_list_id == final_list && g.source_position == final_position {
                // Landed exactly where it started; nothing to persist
                return;
            }
        }

        web_sys::console::log_1(
            &format!(
                "[DND] Drop: task={}, list={}, position={}",
                dragged_id, final_list, final_position
            )
            .into(),
        );
        let client = client_id.get_value();
        spawn_local(async move {
            if let Err(e) = commands::move_task(dragged_id, final_list, final_position, &client).await {
                web_sys::console::warn_1(&format!("[DND] Move failed: {}", e).into());
                ctx.notify_error(format!("Could not move task: {}", e));
                ctx.reload();
            }
        });
    });

    let columns = move || board::lists_in_order(&store.lists().get());

    view! {
        <div class="board-view">
            <For
                each=columns
                key=|list| (list.id, list.position, list.title.clone())
                children=move |list| {
                    view! {
                        <ListColumn
                            list=list
                            dnd=dnd
                            on_task_mousedown=on_task_mousedown
                        />
                    }
                }
            />
        </div>
    }
}
