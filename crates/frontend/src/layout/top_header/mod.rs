//! Top bar: mobile menu button and application title.

pub mod mobile_menu;

pub use mobile_menu::MobileMenu;

use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <MobileMenu />
            <div class="top-header__brand">
                <span class="top-header__title">"Navigator"</span>
            </div>
        </div>
    }
}
