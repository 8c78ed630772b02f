use crate::layout::state::SidebarState;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Transient notification driven by `SidebarState::snackbar`.
#[component]
pub fn Snackbar(state: RwSignal<SidebarState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.snackbar.open)>
            <div class="snackbar" role="status">
                <span class="snackbar__message">
                    {move || state.with(|s| s.snackbar.message.clone())}
                </span>
                <button
                    class="snackbar__close"
                    title="Dismiss"
                    on:click=move |_| state.update(|s| s.dismiss_notification())
                >
                    {icon("close")}
                </button>
            </div>
        </Show>
    }
}
