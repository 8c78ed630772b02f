use crate::routes::pages::{DashboardPage, HomePage, NotFound, SettingsPage};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn Center() -> impl IntoView {
    view! {
        <main data-zone="center" class="app-main">
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/settings") view=SettingsPage />
                <Route path=path!("/login") view=LoginPage />
            </Routes>
        </main>
    }
}
