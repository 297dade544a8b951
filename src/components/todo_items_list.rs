//! Todo Items List Component
//!
//! Renders the items in state order, keyed by id, with drag-to-reorder.
//! Uses leptos-dragdrop; a finished drag becomes a `setAllItems` dispatch.

use leptos::prelude::*;
use todo_core::ReorderIntent;

use crate::components::TodoItemCard;
use crate::context::use_todo_items;

use leptos_dragdrop::*;

#[component]
pub fn TodoItemsList() -> impl IntoView {
    let ctx = use_todo_items();

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |gesture: DragEnd| {
        // Indices refer to what is on screen, which is the current state order
        let displayed = ctx.state.get_untracked().todo_items;
        match ReorderIntent::new(gesture.source, gesture.destination).into_action(&displayed) {
            Some(action) => ctx.dispatch(action),
            None => log::debug!("[DND] Drag cancelled: {:?}", gesture),
        }
    });

    // While dragging, transitions are switched off
    let list_class = move || {
        if dnd.is_dragging() { "todo-list dragging" } else { "todo-list animated" }
    };

    view! {
        <ul class=list_class on:mouseleave=make_on_list_mouseleave(dnd)>
            <For
                each=move || ctx.items()
                key=|item| item.id.clone()
                children=move |item| {
                    // Rows are keyed by id, so position and content are read live
                    let id = item.id.clone();
                    let position = Memo::new({
                        let id = id.clone();
                        move |_| ctx.position_of(&id).unwrap_or(usize::MAX)
                    });
                    let current = Memo::new(move |_| ctx.item(&id).unwrap_or_else(|| item.clone()));
                    let index = move || position.get_untracked();

                    let row_class = move || {
                        let index = position.get();
                        let mut c = String::from("todo-row");
                        if dnd.is_dragged(index) { c.push_str(" dragging"); }
                        if dnd.is_drop_target(index) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=make_on_mousedown(dnd, index)
                            on:mouseenter=make_on_row_mouseenter(dnd, index)
                        >
                            <TodoItemCard item=current />
                        </li>
                    }
                }
            />
        </ul>
    }
}
