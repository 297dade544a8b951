//! Todo Item Card Component

use leptos::prelude::*;
use todo_core::{TodoAction, TodoItem};

use crate::context::use_todo_items;

/// A single todo: checkbox, title, delete button and optional details
#[component]
pub fn TodoItemCard(#[prop(into)] item: Signal<TodoItem>) -> impl IntoView {
    let ctx = use_todo_items();

    let id = item.with_untracked(|item| item.id.clone());
    let checkbox_name = format!("checked-{}", id);
    let delete_id = id.clone();
    let done = move || item.with(|item| item.done);

    // Completing an item also moves it below the open ones
    let toggle_done = move |_| {
        ctx.dispatch(TodoAction::ToggleDone { id: id.clone() });
        ctx.dispatch(TodoAction::SortByCompletion);
    };

    let delete = move |_| {
        ctx.dispatch(TodoAction::Delete { id: delete_id.clone() });
    };

    view! {
        <article class=move || if done() { "todo-card done" } else { "todo-card" }>
            <div class="todo-card-header">
                <label class="todo-card-label">
                    <input
                        type="checkbox"
                        name=checkbox_name
                        prop:checked=done
                        on:change=toggle_done
                    />
                    <span class="todo-title">{move || item.with(|item| item.title.clone())}</span>
                </label>
                <button class="delete-btn" aria-label="delete" on:click=delete>"×"</button>
            </div>
            {move || {
                item.with(|item| item.details.clone())
                    .filter(|d| !d.is_empty())
                    .map(|d| view! { <p class="todo-details">{d}</p> })
            }}
        </article>
    }
}
