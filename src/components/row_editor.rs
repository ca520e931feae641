//! Row Editor Component
//!
//! Inline edit surface pre-filled with the row's current values.

use leptos::prelude::*;

use crate::components::FieldInputs;
use crate::forms::{FormField, FormValues};

#[component]
pub fn RowEditor(
    fields: &'static [FormField],
    values: RwSignal<FormValues>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <div class="row-editor-backdrop">
            <form class="row-editor" on:submit=submit>
                <h3 class="row-editor-title">"Editar registro"</h3>
                <FieldInputs fields=fields values=values />
                <div class="form-actions">
                    <button type="submit" class="btn-primary">"Salvar"</button>
                    <button type="button" class="btn-outline" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}
