//! Todo Item Form Component
//!
//! Title plus optional details; submitting adds the item at the top.

use leptos::prelude::*;
use todo_core::{NewTodoItem, TodoAction};

use crate::context::use_todo_items;

/// Build the `add` payload; `None` when the title is blank
fn new_item_from_form(title: &str, details: &str) -> Option<NewTodoItem> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let item = NewTodoItem::new(title);
    let details = details.trim();
    Some(if details.is_empty() { item } else { item.with_details(details) })
}

#[component]
pub fn TodoItemForm() -> impl IntoView {
    let ctx = use_todo_items();

    let (title, set_title) = signal(String::new());
    let (details, set_details) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(item) = new_item_from_form(&title.get(), &details.get()) else {
            return;
        };
        ctx.dispatch(TodoAction::add(item));
        set_title.set(String::new());
        set_details.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=add_item>
            <input
                type="text"
                class="todo-form-title"
                placeholder="Title"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                class="todo-form-details"
                placeholder="Details"
                rows="3"
                prop:value=move || details.get()
                on:input=move |ev| set_details.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
