//! Loading and error lines rendered above list tables.

use leptos::prelude::*;

/// Loading line, load error and last mutation notice above a table.
#[component]
pub fn ListFeedback(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] notice: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="list-feedback list-feedback--loading">"Загрузка..."</p>
        </Show>
        {move || error.get().map(|message| view! { <p class="list-feedback list-feedback--error">{message}</p> })}
        {move || notice.get().map(|message| view! { <p class="list-feedback list-feedback--notice">{message}</p> })}
    }
}

