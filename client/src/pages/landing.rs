//! Public landing page: house catalog and booking-request form.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::net::types::House;
use crate::state::booking_form::{BookingFormState, MAX_GUESTS, MIN_GUESTS};
use crate::state::list_view::LoadPhase;

fn price_per_night(house: &House) -> String {
    format!("{} ₽/сутки", house.base_price)
}

fn capacity_label(house: &House) -> String {
    format!("До {} гостей", house.capacity)
}

fn house_option_label(house: &House) -> String {
    format!("{} · {} ₽", house.name, house.base_price)
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Отправка..." } else { "Отправить заявку" }
}

/// Landing page. Loads the catalog once on mount.
#[component]
pub fn LandingPage() -> impl IntoView {
    let state = RwSignal::new(BookingFormState::default());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::config::ApiConfig>().client();

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        Effect::new(move || {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.list_public_houses().await;
                let _ = state.try_update(|s| s.catalog_loaded(result));
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = state.try_update(BookingFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.create_booking_request(&payload).await;
                let _ = state.try_update(|s| s.finish_submit(&result));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <main class="landing">
            <section class="landing__hero">
                <h1>"База отдыха «Тепло» · Архыз"</h1>
                <p class="landing__lead">
                    "Домики в лесу с видом на горы, тишина, мангальная зона и быстрый Wi‑Fi. "
                    "Оставьте заявку — подберём лучший вариант по вашим датам."
                </p>
            </section>

            <div class="landing__grid">
                <section class="catalog">
                    <h2>"🏔 Домики и цены"</h2>
                    {move || match state.with(|s| s.catalog.clone()) {
                        LoadPhase::Loading => view! { <p>"Загрузка..."</p> }.into_any(),
                        LoadPhase::Failed(message) => view! { <p class="catalog__error">{message}</p> }.into_any(),
                        LoadPhase::Loaded => view! {
                            <div class="catalog__list">
                                {state
                                    .with(|s| s.houses.clone())
                                    .into_iter()
                                    .map(|house| view! { <HouseCard house=house/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any(),
                    }}
                </section>

                <form class="booking-form" on:submit=on_submit>
                    <h2>"📝 Заявка на бронирование"</h2>

                    <label>"Домик"</label>
                    <select
                        prop:value=move || state.with(|s| s.form.house_id.clone())
                        on:change=move |ev| state.update(|s| s.form.house_id = event_target_value(&ev))
                    >
                        {move || {
                            state.with(|s| {
                                s.houses
                                    .iter()
                                    .map(|house| {
                                        view! { <option value=house.id.to_string()>{house_option_label(house)}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>

                    <label>"Имя"</label>
                    <input
                        required=true
                        prop:value=move || state.with(|s| s.form.guest_name.clone())
                        on:input=move |ev| state.update(|s| s.form.guest_name = event_target_value(&ev))
                    />

                    <label>"Телефон"</label>
                    <input
                        required=true
                        placeholder="+7..."
                        prop:value=move || state.with(|s| s.form.guest_phone.clone())
                        on:input=move |ev| state.update(|s| s.form.guest_phone = event_target_value(&ev))
                    />

                    <div class="booking-form__dates">
                        <div>
                            <label>"Заезд"</label>
                            <input
                                type="date"
                                required=true
                                prop:value=move || state.with(|s| s.form.check_in.clone())
                                on:input=move |ev| state.update(|s| s.form.check_in = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>"Выезд"</label>
                            <input
                                type="date"
                                required=true
                                prop:value=move || state.with(|s| s.form.check_out.clone())
                                on:input=move |ev| state.update(|s| s.form.check_out = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <label>"Гостей"</label>
                    <input
                        type="number"
                        min=MIN_GUESTS.to_string()
                        max=MAX_GUESTS.to_string()
                        prop:value=move || state.with(|s| s.form.guests_count.clone())
                        on:input=move |ev| state.update(|s| s.form.guests_count = event_target_value(&ev))
                    />

                    <label>"Комментарий"</label>
                    <textarea
                        rows="3"
                        prop:value=move || state.with(|s| s.form.guest_comment.clone())
                        on:input=move |ev| state.update(|s| s.form.guest_comment = event_target_value(&ev))
                    ></textarea>

                    <button type="submit" class="btn btn--primary" disabled=move || state.with(|s| s.submitting)>
                        {move || submit_label(state.with(|s| s.submitting))}
                    </button>
                    <Show when=move || state.with(|s| !s.result.is_empty())>
                        <p class="booking-form__result">{move || state.with(|s| s.result.clone())}</p>
                    </Show>
                </form>
            </div>
        </main>
    }
}

/// One catalog entry: name, nightly price, capacity and blurb.
#[component]
fn HouseCard(house: House) -> impl IntoView {
    let price = price_per_night(&house);
    let capacity = capacity_label(&house);
    view! {
        <div class="house-card">
            <div class="house-card__head">
                <b>{house.name}</b>
                <span>{price}</span>
            </div>
            <div class="house-card__meta">{capacity}</div>
            <div class="house-card__meta">{house.short_description}</div>
        </div>
    }
}
