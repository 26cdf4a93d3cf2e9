//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the current board from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the current board from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current board ID - read
    pub current_board: ReadSignal<u32>,
    /// Transient error text shown in the app shell - read
    pub error_message: ReadSignal<Option<String>>,
    set_error_message: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_board: ReadSignal<u32>,
        error_message: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_board,
            error_message: error_message.0,
            set_error_message: error_message.1,
        }
    }

    /// Discard the local cache and re-fetch the board from server truth
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Surface a transient error to the user
    pub fn notify_error(&self, message: impl Into<String>) {
        self.set_error_message.set(Some(message.into()));
    }

    /// Dismiss the error banner
    pub fn clear_error(&self) {
        self.set_error_message.set(None);
    }
}
