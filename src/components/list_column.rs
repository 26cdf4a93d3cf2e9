//! List Column Component
//!
//! A single board column: title, ordered cards, and an add-task form. The
//! column body is an append drop target; each card is an insert-before
//! target.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::*;

use crate::board;
use crate::commands;
use crate::context::AppContext;
use crate::models::{Task, TaskList};
use crate::store::{store_remove_task, use_board_store, BoardStateStoreFields};
use crate::components::NewTaskForm;

/// One board column
#[component]
pub fn ListColumn(
    list: TaskList,
    dnd: DndSignals,
    on_task_mousedown: Callback<u32>,
) -> impl IntoView {
    let store = use_board_store();
    let list_id = list.id;

    let column_tasks = move || board::tasks_in_list(&store.tasks().get(), list_id);

    // DnD handlers: entering the column targets its end, leaving clears.
    // Card targets override while the cursor is over a card.
    let on_mouseenter = make_on_column_mouseenter(dnd, list_id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Column(id)) if id == list_id)
    };

    let column_class = move || {
        let mut c = String::from("list-column");
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        <div
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <h2 class="list-title">{list.title.clone()}</h2>

            <div class="list-cards">
                <For
                    each=column_tasks
                    key=|task| (task.id, task.list_id, task.position, task.title.clone())
                    children=move |task| {
                        view! {
                            <TaskCard task=task dnd=dnd on_mousedown=on_task_mousedown />
                        }
                    }
                />
            </div>

            <NewTaskForm list_id=list_id />
        </div>
    }
}

/// One draggable card
#[component]
fn TaskCard(task: Task, dnd: DndSignals, on_mousedown: Callback<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();
    let id = task.id;

    let dnd_mousedown = make_on_mousedown(dnd, id);
    let on_card_mouseenter = make_on_card_mouseenter(dnd, id);

    // Visual state
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Card(tid)) if tid == id)
    };

    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let delete = move |_| {
        spawn_local(async move {
            match commands::delete_task(id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(e) => {
                    ctx.notify_error(format!("Could not delete task: {}", e));
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <div
            class=card_class
            on:mousedown=move |ev: web_sys::MouseEvent| {
                on_mousedown.run(id);
                dnd_mousedown(ev);
            }
            on:mouseenter=on_card_mouseenter
        >
            <span class="card-title">{task.title.clone()}</span>
            <button type="button" class="card-delete-btn" on:click=delete>
                "\u{00d7}"
            </button>
        </div>
    }
}
