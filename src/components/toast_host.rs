//! Toast Host Component
//!
//! Renders the toast stack kept in the UI store.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store.toasts().with(|stack| stack.items.clone())
                // re-render when a toast starts fading
                key=|toast| (toast.id, toast.leaving)
                children=move |toast| {
                    let phase = if toast.leaving { "fade-out" } else { "fade-in" };
                    view! {
                        <div class=format!("toast {} {}", toast.severity.css_class(), phase) role="status">
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
