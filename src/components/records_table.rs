//! Records Table Component
//!
//! Search box, row count and the table body with per-row delete.

use leptos::prelude::*;
use log::{debug, info};

use crate::components::DeleteConfirmButton;
use crate::models::TableRow;
use crate::seed;
use crate::state::records::{RecordsState, TableAction};

#[component]
fn RecordRow(
    /// 1-based position in the rendered set
    index: usize,
    row: TableRow,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = row.id;

    view! {
        <tr>
            <td>{index}</td>
            <td>{row.name}</td>
            <td>{row.category}</td>
            <td>{row.technologies}</td>
            <td>{row.date}</td>
            <td><span class=row.status.class()>{row.status.label()}</span></td>
            <td>
                <a href=row.url target="_blank" class="action-btn edit-btn" rel="noopener noreferrer">
                    <i class="fab fa-github"></i>
                    " GitHub"
                </a>
                <DeleteConfirmButton
                    button_class="action-btn delete-btn"
                    row_id=id
                    on_confirm=move |_: ()| on_delete.run(id)
                />
            </td>
        </tr>
    }
}

#[component]
pub fn RecordsTable() -> impl IntoView {
    let records = RwSignal::new(RecordsState::new(seed::table_rows()));
    let (search_term, set_search_term) = signal(String::new());
    let numbered = Memo::new(move |_| records.with(|r| r.numbered()));

    let on_search = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        set_search_term.set(term.clone());
        records.update(|r| r.apply(TableAction::Search(term)));
        debug!("[TABLE] Search matched {} rows", records.with_untracked(|r| r.count()));
    };

    let on_delete = Callback::new(move |id: u32| {
        records.update(|r| r.apply(TableAction::Delete(id)));
        info!("[TABLE] Deleted row {}, {} left", id, records.with_untracked(|r| r.rows().len()));
    });

    view! {
        <div class="table-controls">
            <input
                type="text"
                id="tableSearch"
                class="table-search"
                placeholder="Поиск по проектам..."
                prop:value=move || search_term.get()
                on:input=on_search
            />
            <span class="table-count">
                "Записей: "
                <span id="tableCount">{move || records.with(|r| r.count())}</span>
            </span>
        </div>

        <table class="projects-table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Название"</th>
                    <th>"Категория"</th>
                    <th>"Технологии"</th>
                    <th>"Дата"</th>
                    <th>"Статус"</th>
                    <th>"Действия"</th>
                </tr>
            </thead>
            <tbody id="tableBody">
                {move || numbered.get().into_iter().map(|(index, row)| view! {
                    <RecordRow index=index row=row on_delete=on_delete />
                }).collect_view()}
            </tbody>
        </table>
    }
}
