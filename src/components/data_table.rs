//! Data Table Component
//!
//! Renders a [`TableBody`] with an optional action column. Cell values are
//! inserted as text.

use leptos::prelude::*;

use crate::render::{RenderedRow, TableBody, TableLayout};

#[component]
pub fn DataTable(
    layout: TableLayout,
    #[prop(into)] body: Signal<TableBody>,
    on_edit: Option<Callback<RenderedRow>>,
    on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {layout.columns.iter().map(|c| view! { <th>{c.header}</th> }).collect_view()}
                    {layout.actions.then(|| view! { <th class="text-right">"Ações"</th> })}
                </tr>
            </thead>
            <tbody>
                {move || match body.get() {
                    TableBody::Placeholder { colspan, message } => view! {
                        <tr>
                            <td colspan=colspan.to_string() class="table-placeholder">{message}</td>
                        </tr>
                    }.into_any(),
                    TableBody::Rows(rows) => rows.into_iter().map(|row| view! {
                        <DataRow row=row actions=layout.actions on_edit=on_edit on_delete=on_delete />
                    }).collect_view().into_any(),
                }}
            </tbody>
        </table>
    }
}

#[component]
fn DataRow(
    row: RenderedRow,
    actions: bool,
    on_edit: Option<Callback<RenderedRow>>,
    on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = row.id;
    let edit_row = row.clone();
    let cells = row.cells.into_iter().map(|cell| view! {
        <td class=cell.class.unwrap_or_default()>{cell.text}</td>
    }).collect_view();

    // rows without an id cannot be addressed
    let action_cell = actions.then(move || view! {
        <td class="text-right row-actions">
            {on_edit.filter(|_| id.is_some()).map(|cb| view! {
                <button
                    type="button"
                    class="btn-outline text-sm edit-btn"
                    title="Editar"
                    on:click=move |_| cb.run(edit_row.clone())
                >
                    "✏️"
                </button>
            })}
            {on_delete.zip(id).map(|(cb, id)| view! {
                <button
                    type="button"
                    class="btn-outline text-sm delete-btn"
                    title="Excluir"
                    on:click=move |_| cb.run(id)
                >
                    "🗑️"
                </button>
            })}
        </td>
    });

    view! { <tr>{cells}{action_cell}</tr> }
}
