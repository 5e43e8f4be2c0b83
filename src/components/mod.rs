//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod home_page;
mod new_task_form;
mod status_banner;
mod task_item;
mod task_list_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use home_page::HomePage;
pub use new_task_form::NewTaskForm;
pub use status_banner::StatusBanner;
pub use task_item::TaskItem;
pub use task_list_page::TaskListPage;
