use crate::config::ShellTimings;
use crate::layout::shell_context::ShellContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar open/closed state shared by the sidebar and the top bar.
    provide_context(ShellContext::new(ShellTimings::default()));

    view! {
        <ThemeProvider>
            <AuthProvider>
                <Router>
                    <Shell />
                </Router>
            </AuthProvider>
        </ThemeProvider>
    }
}
