//! New Task Form Component
//!
//! Inline form at the bottom of each column for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateTaskArgs};
use crate::context::AppContext;
use crate::store::{store_upsert_task, use_board_store};

/// Form for adding a task to one list
#[component]
pub fn NewTaskForm(list_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.is_empty() {
            return;
        }
        let board_id = ctx.current_board.get();

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &title,
                list_id,
            };
            match commands::create_task(board_id, &args).await {
                Ok(task) => {
                    store_upsert_task(&store, task);
                    set_new_title.set(String::new());
                }
                Err(e) => {
                    ctx.notify_error(format!("Could not create task: {}", e));
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || new_title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
