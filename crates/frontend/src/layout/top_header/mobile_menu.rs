//! Hamburger button that opens the sidebar on mobile.

use crate::layout::shell_context::use_shell;
use crate::layout::left::toggle::TriggerEvent;
use leptos::prelude::*;

#[component]
pub fn MobileMenu() -> impl IntoView {
    let shell = use_shell();

    let on_press = move |ev: web_sys::MouseEvent| {
        let ev: &web_sys::Event = &ev;
        shell.with_triggers(|triggers| triggers.hamburger_pressed(ev as &dyn TriggerEvent));
    };

    view! {
        <Show when=move || shell.is_mobile()>
            <button
                class="hamburger"
                class:open=move || shell.is_open()
                aria-label="Toggle navigation"
                aria-expanded=move || if shell.is_open() { "true" } else { "false" }
                on:click=on_press
            >
                <span class="hamburger__bar"></span>
                <span class="hamburger__bar"></span>
                <span class="hamburger__bar"></span>
            </button>
        </Show>
    }
}
