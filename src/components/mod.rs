//! UI Components
//!
//! Reusable Leptos components.

mod board_tab_bar;
mod board_view;
mod list_column;
mod member_search;
mod new_task_form;

pub use board_tab_bar::BoardTabBar;
pub use board_view::BoardView;
pub use list_column::ListColumn;
pub use member_search::MemberSearch;
pub use new_task_form::NewTaskForm;
