//! Admin navigation links and the page frame that carries them.

use leptos::prelude::*;

/// `(href, label)` of every admin section, in display order.
pub const ADMIN_LINKS: [(&str, &str); 4] = [
    ("/admin", "Заявки"),
    ("/admin/bookings", "Бронирования"),
    ("/admin/houses", "Домики"),
    ("/admin/audit", "Аудит"),
];

/// Static row of section links.
#[component]
pub fn AdminNav() -> impl IntoView {
    view! {
        <p class="admin-nav">
            "Разделы: "
            {ADMIN_LINKS
                .iter()
                .map(|(href, label)| view! { <a class="admin-nav__link" href=*href>{*label}</a> })
                .collect::<Vec<_>>()}
        </p>
    }
}

/// Page frame shared by the admin views: heading, navigation, content.
#[component]
pub fn AdminShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <main class="admin-page">
            <h1 class="admin-page__title">{title}</h1>
            <AdminNav/>
            {children()}
        </main>
    }
}
