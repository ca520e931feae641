//! Form Field Inputs
//!
//! One labelled input per field, bound to a shared map of raw values.

use leptos::prelude::*;

use crate::forms::{is_checked, is_selected, FieldKind, FormField, FormValues};

#[component]
pub fn FieldInputs(fields: &'static [FormField], values: RwSignal<FormValues>) -> impl IntoView {
    let set_value = move |name: &'static str, value: String| {
        values.update(|v| {
            v.insert(name.to_string(), value);
        });
    };

    fields.iter().map(|field| {
        let name = field.name;
        let current = move || values.with(|v| v.get(name).cloned().unwrap_or_default());

        let input = match field.kind {
            FieldKind::Checkbox { .. } => view! {
                <input
                    type="checkbox"
                    name=name
                    prop:checked=move || values.with(|v| is_checked(v, name))
                    on:change=move |ev| set_value(name, event_target_checked(&ev).to_string())
                />
            }.into_any(),
            FieldKind::Select(options) => view! {
                <select
                    name=name
                    on:change=move |ev| set_value(name, event_target_value(&ev))
                >
                    {options.iter().map(|&(value, label)| view! {
                        <option
                            value=value
                            prop:selected=move || values.with(|v| is_selected(v, name, value))
                        >
                            {label}
                        </option>
                    }).collect_view()}
                </select>
            }.into_any(),
            kind => view! {
                <input
                    type=kind.input_type()
                    name=name
                    required=field.required
                    prop:value=current
                    on:input=move |ev| set_value(name, event_target_value(&ev))
                />
            }.into_any(),
        };

        view! {
            <label class="form-field">
                <span class="form-label">{field.label}</span>
                {input}
            </label>
        }
    }).collect_view()
}
