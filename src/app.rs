//! ESCALA360 Frontend App
//!
//! Application shell: navigation, the page resolved from the current path,
//! and the toast host.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DashboardPanel, NavBar, ResourcePanel, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{self, PageComponent, PageDescriptor};
use crate::store::UiState;
use crate::theme::{apply_theme, document_theme, LocalStorage, ThemeSettings};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Theme: persisted preference wins over whatever the server rendered
    let settings = ThemeSettings::new(LocalStorage);
    let theme = settings.stored().unwrap_or_else(document_theme);
    apply_theme(theme);

    let store = Store::new(UiState::new(theme));
    provide_context(store);
    provide_context(AppContext::new(config, store));

    let path = pages::current_path();
    let page = pages::resolve(&path);
    match page {
        Some(page) => {
            log::info!("[APP] {} -> {} ({} components)", path, page.title, page.components.len());
            set_document_title(page.title);
        }
        None => log::warn!("[APP] no page registered for {}", path),
    }

    view! {
        <NavBar current=page settings=settings />
        <main class="page-content fade-in">
            {match page {
                Some(page) => view! { <PageBody page=page /> }.into_any(),
                None => view! { <NotFound /> }.into_any(),
            }}
        </main>
        <ToastHost />
    }
}

#[component]
fn PageBody(page: &'static PageDescriptor) -> impl IntoView {
    view! {
        <h1 class="page-title">{page.title}</h1>
        {page.components.iter().map(|component| match *component {
            PageComponent::Dashboard => view! { <DashboardPanel /> }.into_any(),
            PageComponent::Binder(kind) => view! { <ResourcePanel kind=kind /> }.into_any(),
        }).collect_view()}
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="page-title">"Página não encontrada"</h1>
            <a href="/">"Voltar ao painel"</a>
        </div>
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} – ESCALA360", title));
    }
}
