pub mod center;
pub mod left;
pub mod responsive;
pub mod shell_context;
pub mod state;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (hamburger on mobile)          |
/// +------------------------------------------+
/// |  Sidebar  |          Content              |
/// +------------------------------------------+
/// ```
///
/// On mobile the sidebar slides over the content with a backdrop.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Sidebar />
                <center::Center />
            </div>
        </div>
    }
}
