//! Admin houses list with an "add house" form.

#[cfg(test)]
#[path = "admin_houses_test.rs"]
mod admin_houses_test;

use leptos::prelude::*;

use crate::components::admin_nav::AdminShell;
use crate::components::data_table::{EmptyRow, TableHead};
use crate::components::list_feedback::ListFeedback;
use crate::config::ApiConfig;
use crate::net::query::NoFilter;
use crate::net::types::House;
use crate::state::house_form::{HouseFormState, MIN_CAPACITY, MIN_PRICE};
use crate::state::list_view::ListState;
use crate::state::sources::HouseSource;
use crate::util::tasks::spawn_reload;

pub(crate) const HOUSE_COLUMNS: &[&str] = &["ID", "Название", "Slug", "Вмест.", "Цена"];
pub(crate) const NO_HOUSES: &str = "Домиков пока нет";

/// `/admin/houses`.
#[component]
pub fn AdminHousesPage() -> impl IntoView {
    let source = HouseSource(expect_context::<ApiConfig>().client());
    let list = RwSignal::new(ListState::<House>::default());
    let form = RwSignal::new(HouseFormState::default());

    Effect::new({
        let source = source.clone();
        move || spawn_reload(source.clone(), NoFilter, list)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(HouseFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let source = source.clone();
            leptos::task::spawn_local(async move {
                let result = source.0.create_house(&payload).await;
                let _ = form.try_update(|s| s.finish_submit(&result));
                spawn_reload(source, NoFilter, list);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &source);
        }
    };

    view! {
        <AdminShell title="Admin · Houses">
            <form class="house-form" on:submit=on_submit>
                <input
                    required=true
                    placeholder="Название"
                    prop:value=move || form.with(|s| s.form.name.clone())
                    on:input=move |ev| form.update(|s| s.form.name = event_target_value(&ev))
                />
                <input
                    required=true
                    placeholder="Slug"
                    prop:value=move || form.with(|s| s.form.slug.clone())
                    on:input=move |ev| form.update(|s| s.form.slug = event_target_value(&ev))
                />
                <input
                    type="number"
                    min=MIN_CAPACITY.to_string()
                    placeholder="Вместимость"
                    prop:value=move || form.with(|s| s.form.capacity.clone())
                    on:input=move |ev| form.update(|s| s.form.capacity = event_target_value(&ev))
                />
                <input
                    type="number"
                    min=MIN_PRICE.to_string()
                    placeholder="Цена"
                    prop:value=move || form.with(|s| s.form.base_price.clone())
                    on:input=move |ev| form.update(|s| s.form.base_price = event_target_value(&ev))
                />
                <textarea
                    placeholder="Короткое описание"
                    prop:value=move || form.with(|s| s.form.short_description.clone())
                    on:input=move |ev| form.update(|s| s.form.short_description = event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn" disabled=move || form.with(|s| s.submitting)>
                    "Добавить домик"
                </button>
                {move || form.with(|s| s.error.clone()).map(|message| view! { <p class="house-form__error">{message}</p> })}
            </form>

            <ListFeedback
                loading=Signal::derive(move || list.with(ListState::is_loading))
                error=Signal::derive(move || list.with(|s| s.error().map(str::to_owned)))
                notice=Signal::derive(move || list.with(|s| s.notice.clone()))
            />

            <table class="data-table">
                <TableHead columns=HOUSE_COLUMNS/>
                <tbody>
                    {move || {
                        list.with(|s| s.rows.clone())
                            .into_iter()
                            .map(|house| {
                                view! {
                                    <tr class="data-table__row">
                                        <td>{house.id}</td>
                                        <td>{house.name}</td>
                                        <td>{house.slug}</td>
                                        <td>{house.capacity}</td>
                                        <td>{house.base_price}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=move || list.with(ListState::shows_empty_row)>
                        <EmptyRow columns=HOUSE_COLUMNS message=NO_HOUSES/>
                    </Show>
                </tbody>
            </table>
        </AdminShell>
    }
}
