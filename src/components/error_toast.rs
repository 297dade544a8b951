//! Error Toast Component
//!
//! Save-failure notification: dismissible, and closes itself after the
//! configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::store::{
    store_dismiss_save_error, store_expire_save_error, store_last_save_error, store_save_error_seq,
    store_save_failed, use_ui_store,
};

#[component]
pub fn ErrorToast() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ui = use_ui_store();
    let auto_hide_ms = config.toast_auto_hide_ms;

    // Each time the toast opens, schedule closing that particular failure
    Effect::new(move |_| {
        if store_save_failed(&ui) {
            let seq = store_save_error_seq(&ui);
            spawn_local(async move {
                TimeoutFuture::new(auto_hide_ms).await;
                store_expire_save_error(&ui, seq);
            });
        }
    });

    let message = config.save_error_message;

    view! {
        <Show when=move || store_save_failed(&ui)>
            <div
                class="toast toast-error"
                role="alert"
                title=move || store_last_save_error(&ui).unwrap_or_default()
            >
                <span class="toast-message">{message.clone()}</span>
                <button
                    class="toast-close"
                    aria-label="close"
                    on:click=move |_| store_dismiss_save_error(&ui)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
