//! Todo List App
//!
//! Wires storage, the todo store and the UI store together, then renders
//! the form, the list and the error toast.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{PersistenceSynchronizer, TodoStore};

use crate::components::{ErrorToast, TodoItemForm, TodoItemsList};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::dev_tools;
use crate::storage::open_local_storage;
use crate::store::{store_report_save_error, UiState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ui_store = Store::new(UiState::default());
    provide_context(ui_store);

    // Load persisted todos before the first render
    let sync = PersistenceSynchronizer::with_key(open_local_storage(), config.storage_key.clone())
        .on_save_error(move |error| store_report_save_error(&ui_store, error));
    let mut todo_store = TodoStore::new(sync);
    if !todo_store.start() {
        log::info!("[APP] Starting with an empty list");
    }

    let ctx = TodoContext::new(todo_store);
    provide_context(ctx);

    if config.dev_tools {
        dev_tools::install(ctx);
    }
    provide_context(config);

    view! {
        <ErrorToast />
        <div class="container">
            <header>
                <h1>"Todo List"</h1>
            </header>
            <main>
                <TodoItemForm />
                <TodoItemsList />
                <p class="item-count">
                    {move || {
                        let state = ctx.state.get();
                        format!("{} items, {} done", state.len(), state.done_count())
                    }}
                </p>
            </main>
        </div>
    }
}
