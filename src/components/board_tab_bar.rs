//! Board Tab Bar Component
//!
//! Tab bar for switching between boards.

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

/// Board tab bar component
#[component]
pub fn BoardTabBar(
    current_board: ReadSignal<u32>,
    set_current_board: WriteSignal<u32>,
) -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="board-tab-bar">
            <For
                each=move || store.boards().get()
                key=|board| board.id
                children=move |board| {
                    let id = board.id;
                    let is_active = move || current_board.get() == id;
                    let tab_class = move || {
                        if is_active() { "board-tab active" } else { "board-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| set_current_board.set(id)
                        >
                            {board.title.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
