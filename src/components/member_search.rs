//! Member Search Component
//!
//! Debounced user search for inviting board members. Each keystroke
//! supersedes the previously scheduled query, so at most one request is in
//! flight per pause in typing.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::models::{BoardUser, Role};

/// Quiet period before a query is sent
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search-and-invite panel
#[component]
pub fn MemberSearch() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<BoardUser>::new());
    let (role, set_role) = signal(Role::Member);

    // The scheduled query, if any; replaced (and cancelled) on every keystroke
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value = input.value();
        set_query.set(value.clone());

        pending.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
            if value.trim().is_empty() {
                set_results.set(Vec::new());
                return;
            }
            *slot = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                spawn_local(async move {
                    match commands::search_users(&value).await {
                        Ok(users) => set_results.set(users),
                        Err(e) => {
                            web_sys::console::warn_1(
                                &format!("[APP] Member search failed: {}", e).into(),
                            );
                        }
                    }
                });
            }));
        });
    };

    let invite = move |user_id: u32| {
        let board_id = ctx.current_board.get_untracked();
        let selected_role = role.get_untracked();
        spawn_local(async move {
            match commands::invite_member(board_id, user_id, selected_role).await {
                Ok(()) => {
                    set_query.set(String::new());
                    set_results.set(Vec::new());
                }
                Err(e) => ctx.notify_error(format!("Could not invite member: {}", e)),
            }
        });
    };

    view! {
        <div class="member-search">
            <h3>"Invite members"</h3>
            <input
                type="text"
                placeholder="Search users..."
                prop:value=move || query.get()
                on:input=on_input
            />
            <select on:change=move |ev| set_role.set(Role::parse(&event_target_value(&ev)))>
                <option value="member" selected=move || role.get() == Role::Member>"Member"</option>
                <option value="admin" selected=move || role.get() == Role::Admin>"Admin"</option>
                <option value="observer" selected=move || role.get() == Role::Observer>"Observer"</option>
            </select>

            <div class="member-results">
                <For
                    each=move || results.get()
                    key=|user| user.id
                    children=move |user| {
                        let user_id = user.id;
                        view! {
                            <div class="member-result">
                                <span class="member-name">{user.name.clone()}</span>
                                <span class="member-email">{user.email.clone()}</span>
                                <button type="button" on:click=move |_| invite(user_id)>
                                    "Invite"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
