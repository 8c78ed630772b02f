//! User/session block at the bottom of the sidebar.

use crate::layout::state::SidebarState;
use crate::shared::icons::icon;
use contracts::system::auth::Session;
use leptos::prelude::*;

pub const GUEST_NAME: &str = "Guest";
pub const NO_EMAIL: &str = "No email";

pub fn display_name(session: &Session) -> &str {
    session
        .display_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(GUEST_NAME)
}

pub fn display_email(session: &Session) -> &str {
    session.email.as_deref().unwrap_or(NO_EMAIL)
}

/// Letter shown in the avatar when there is no photo.
pub fn avatar_initial(session: &Session) -> String {
    display_name(session)
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[component]
pub fn UserFooter(
    session: RwSignal<Option<Session>>,
    state: RwSignal<SidebarState>,
    #[prop(into)] collapsed: Signal<bool>,
    on_login: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let toggle_popup = move |_| {
        let has_session = session.with_untracked(Option::is_some);
        state.update(|s| s.toggle_logout_popup(has_session));
    };

    view! {
        <div class="sidebar__footer" class:sidebar__footer--collapsed=move || collapsed.get()>
            {move || match session.get() {
                Some(user) => {
                    let avatar = match user.photo_url.clone() {
                        Some(url) => view! { <img class="sidebar__avatar" src=url alt=""/> }.into_any(),
                        None => view! { <span class="sidebar__avatar">{avatar_initial(&user)}</span> }.into_any(),
                    };
                    let name = display_name(&user).to_string();
                    let email = display_email(&user).to_string();
                    let title = name.clone();
                    view! {
                        <div class="sidebar__user">
                            <button class="sidebar__user-button" on:click=toggle_popup title=title>
                                {avatar}
                                <Show when=move || !collapsed.get()>
                                    <div class="sidebar__user-text">
                                        <span class="sidebar__user-name">{name.clone()}</span>
                                        <span class="sidebar__user-email">{email.clone()}</span>
                                    </div>
                                </Show>
                            </button>
                            <Show when=move || state.with(|s| s.show_logout_popup) && session.with(Option::is_some)>
                                <div class="logout-popup">
                                    <button class="logout-popup__button" on:click=move |_| on_logout.run(())>
                                        {icon("log-out")}
                                        <span>"Log out"</span>
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <button class="sidebar__login" on:click=move |_| on_login.run(()) title="Sign in">
                        {icon("log-in")}
                        <Show when=move || !collapsed.get()>
                            <span>"Sign in"</span>
                        </Show>
                    </button>
                }
                .into_any(),
            }}
        </div>
    }
}
