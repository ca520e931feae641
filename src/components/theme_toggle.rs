//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_theme, UiStateStoreFields};
use crate::theme::{DocumentRoot, LocalStorage, ThemeSettings};

#[component]
pub fn ThemeToggle(settings: ThemeSettings<LocalStorage>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let toggle = move |_| {
        let next = settings.switch(store.theme().get_untracked(), &DocumentRoot, &ctx.notifier());
        store_set_theme(&store, next);
    };

    view! {
        <button
            id="darkToggle"
            type="button"
            class="theme-toggle"
            title=move || if store.theme().get().is_dark() { "Modo claro" } else { "Modo escuro" }
            on:click=toggle
        >
            {move || if store.theme().get().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
