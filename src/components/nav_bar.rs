//! Navigation Bar Component
//!
//! Brand, one link per page and the theme toggle.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::pages::{PageDescriptor, PAGES};
use crate::theme::{LocalStorage, ThemeSettings};

#[component]
pub fn NavBar(
    current: Option<&'static PageDescriptor>,
    settings: ThemeSettings<LocalStorage>,
) -> impl IntoView {
    let is_current = move |page: &PageDescriptor| current.is_some_and(|c| c.route == page.route);

    view! {
        <header class="navbar">
            <a class="navbar-brand" href="/">"ESCALA360"</a>
            <nav class="navbar-links">
                {PAGES.iter().map(|page| {
                    let class = if is_current(page) { "nav-link active" } else { "nav-link" };
                    view! { <a class=class href=page.route>{page.title}</a> }
                }).collect_view()}
            </nav>
            <ThemeToggle settings=settings />
        </header>
    }
}
