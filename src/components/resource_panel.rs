//! Resource Panel Component
//!
//! Form + table for one REST resource, driven by its descriptor and the
//! generic binder.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::binder::{Binder, BrowserConfirm, ListState};
use crate::components::{DataTable, FieldInputs, RowEditor};
use crate::context::use_app_context;
use crate::forms::{initial_values, values_from_row, FormField, FormValues};
use crate::render::RenderedRow;
use crate::resources::ResourceKind;

#[component]
pub fn ResourcePanel(kind: ResourceKind) -> impl IntoView {
    let ctx = use_app_context();
    let resource = kind.resource();

    let list = RwSignal::new(ListState::Loading);
    let values = RwSignal::new(initial_values(resource.fields));
    let editing = RwSignal::new(None::<i64>);
    let edit_values = RwSignal::new(FormValues::new());

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            let (transport, notifier) = (ctx.transport(), ctx.notifier());
            match Binder::new(resource, &transport, &notifier).load().await {
                Some(rows) => list.set(ListState::Loaded(rows)),
                None => list.update(ListState::load_failed),
            }
        });
    });

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = values.get_untracked();
        spawn_local(async move {
            let (transport, notifier) = (ctx.transport(), ctx.notifier());
            let submission = Binder::new(resource, &transport, &notifier).submit_create(&current).await;
            values.update(|v| *v = submission.next_form_values(resource.fields, std::mem::take(v)));
            if let Some(outcome) = submission.mutation() {
                list.update(|state| state.apply(outcome));
            }
        });
    };

    let on_delete = resource.can_delete.then(|| {
        Callback::new(move |id: i64| {
            spawn_local(async move {
                let (transport, notifier) = (ctx.transport(), ctx.notifier());
                let outcome = Binder::new(resource, &transport, &notifier)
                    .delete(id, &BrowserConfirm)
                    .await;
                list.update(|state| state.apply(&outcome));
            });
        })
    });

    let on_edit = resource.editor.map(|fields: &'static [FormField]| {
        Callback::new(move |row: RenderedRow| {
            if let Some(id) = row.id {
                edit_values.set(values_from_row(fields, &row.record));
                editing.set(Some(id));
            }
        })
    });

    let save_edit = move || {
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let current = edit_values.get_untracked();
        spawn_local(async move {
            let (transport, notifier) = (ctx.transport(), ctx.notifier());
            let submission = Binder::new(resource, &transport, &notifier).submit_update(id, &current).await;
            editing.update(|e| *e = submission.next_editing(*e));
            if let Some(outcome) = submission.mutation() {
                list.update(|state| state.apply(outcome));
            }
        });
    };

    view! {
        <section class="resource-panel">
            <form class="resource-form" on:submit=create>
                <FieldInputs fields=resource.fields values=values />
                <button type="submit" class="btn-primary">"Cadastrar"</button>
            </form>

            <DataTable
                layout=resource.table
                body=Signal::derive(move || list.with(|state| state.body(resource)))
                on_edit=on_edit
                on_delete=on_delete
            />

            {move || match (editing.get(), resource.editor) {
                (Some(_), Some(fields)) => Some(view! {
                    <RowEditor
                        fields=fields
                        values=edit_values
                        on_save=Callback::new(move |_| save_edit())
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                }),
                _ => None,
            }}
        </section>
    }
}
