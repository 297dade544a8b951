//! UI Components
//!
//! Leptos components for the todo list.

mod error_toast;
mod todo_item_card;
mod todo_item_form;
mod todo_items_list;

pub use error_toast::ErrorToast;
pub use todo_item_card::TodoItemCard;
pub use todo_item_form::TodoItemForm;
pub use todo_items_list::TodoItemsList;
