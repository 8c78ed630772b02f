//! Placeholder content routes rendered next to the sidebar.

use leptos::prelude::*;

#[component]
fn PageFrame(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{title}</h1>
            <div class="page__body">{children()}</div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame title="Home">
            <p>"Use the sidebar to move between sections."</p>
        </PageFrame>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <PageFrame title="Dashboard">
            <p>"Nothing to show yet."</p>
        </PageFrame>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <PageFrame title="Settings">
            <p>"Theme and account settings live in the sidebar."</p>
        </PageFrame>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageFrame title="Page not found">
            <p>"The requested page does not exist."</p>
        </PageFrame>
    }
}
