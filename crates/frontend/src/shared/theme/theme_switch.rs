use super::use_theme;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Switch;

/// Dark mode switch shown in the sidebar.
#[component]
pub fn ThemeSwitch(#[prop(into)] collapsed: Signal<bool>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="sidebar-theme" class:sidebar-theme--collapsed=move || collapsed.get()>
            <button
                class="sidebar-theme__icon"
                title=move || if theme.is_dark_mode() { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=move |_| theme.toggle_theme()
            >
                {move || if theme.is_dark_mode() { icon("moon") } else { icon("sun") }}
            </button>
            <Show when=move || !collapsed.get()>
                <Switch checked=theme.is_dark_mode label="Dark mode"/>
            </Show>
        </div>
    }
}
