//! Admin audit log: the most recent administrative actions.

#[cfg(test)]
#[path = "admin_audit_test.rs"]
mod admin_audit_test;

use leptos::prelude::*;

use crate::components::admin_nav::AdminShell;
use crate::components::data_table::{EmptyRow, TableHead};
use crate::components::list_feedback::ListFeedback;
use crate::config::ApiConfig;
use crate::net::query::AuditQuery;
use crate::net::types::AuditEntry;
use crate::state::list_view::ListState;
use crate::state::sources::AuditSource;
use crate::util::tasks::spawn_reload;

pub(crate) const AUDIT_COLUMNS: &[&str] = &["ID", "Entity", "Action", "Payload", "Created"];
pub(crate) const NO_ENTRIES: &str = "Записей нет";

fn created_label(entry: &AuditEntry) -> String {
    entry.created_at.clone().unwrap_or_else(|| "-".to_owned())
}

/// `/admin/audit`.
#[component]
pub fn AdminAuditPage() -> impl IntoView {
    let source = AuditSource(expect_context::<ApiConfig>().client());
    let list = RwSignal::new(ListState::<AuditEntry>::default());

    let reload = move || spawn_reload(source.clone(), AuditQuery::default(), list);
    Effect::new({
        let reload = reload.clone();
        move || reload()
    });

    view! {
        <AdminShell title="Admin · Audit Log">
            <p>
                <button class="btn" on:click=move |_| reload()>"Обновить"</button>
            </p>

            <ListFeedback
                loading=Signal::derive(move || list.with(ListState::is_loading))
                error=Signal::derive(move || list.with(|s| s.error().map(str::to_owned)))
                notice=Signal::derive(move || list.with(|s| s.notice.clone()))
            />

            <table class="data-table">
                <TableHead columns=AUDIT_COLUMNS/>
                <tbody>
                    {move || {
                        list.with(|s| s.rows.clone())
                            .into_iter()
                            .map(|entry| {
                                let subject = entry.subject();
                                let created = created_label(&entry);
                                view! {
                                    <tr class="data-table__row">
                                        <td>{entry.id}</td>
                                        <td>{subject}</td>
                                        <td>{entry.action}</td>
                                        <td><code class="audit-payload">{entry.payload}</code></td>
                                        <td>{created}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || list.with(ListState::shows_empty_row)>
                        <EmptyRow columns=AUDIT_COLUMNS message=NO_ENTRIES/>
                    </Show>
                </tbody>
            </table>
        </AdminShell>
    }
}
