//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ApiConfig};
use crate::pages::{
    admin_audit::AdminAuditPage, admin_bookings::AdminBookingsPage, admin_houses::AdminHousesPage,
    admin_requests::AdminRequestsPage, landing::LandingPage,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into a `<meta>` tag so the hydrated client calls the
/// same backend the server was configured with.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=config.base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration (from server context during SSR, from the
/// document head after hydration) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(config);

    view! {
        <Title text="База отдыха «Тепло»"/>
        <Meta name="description" content="Домики в лесу с видом на горы, Архыз"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("admin") view=AdminRequestsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("bookings")) view=AdminBookingsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("houses")) view=AdminHousesPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("audit")) view=AdminAuditPage/>
            </Routes>
        </Router>
    }
}
