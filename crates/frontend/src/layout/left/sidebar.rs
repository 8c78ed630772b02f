//! Sidebar: navigation sections, theme switch and the user footer.
//!
//! Composition root of the shell. It mirrors the auth session, watches the
//! viewport and the route, and wires every open/close trigger to the shell
//! context's single toggle owner.

use super::footer::UserFooter;
use super::links::{is_active, TapFeedback, SECTIONS};
use super::session_actions::SessionActions;
use super::toggle::{RouteWatcher, TriggerEvent};
use crate::layout::responsive::{sync_scroll_lock, use_responsive_monitor};
use crate::layout::shell_context::use_shell;
use crate::shared::document::WebDocument;
use crate::shared::icons::icon;
use crate::shared::snackbar::Snackbar;
use crate::shared::theme::ThemeSwitch;
use crate::system::auth::use_auth;
use crate::system::router::use_navigator;
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use std::rc::Rc;

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell();
    let state = shell.sidebar;
    let auth = use_auth();
    let navigator = use_navigator();
    let pathname = use_location().pathname;

    use_responsive_monitor(state);

    // Session mirror. The subscription is released with this component.
    let session = RwSignal::new(auth.current_session());
    let subscription = auth.subscribe(Rc::new(move |emitted: Option<Session>| {
        log::debug!("sidebar session: {:?}", emitted.as_ref().map(|s| &s.uid));
        state.update(|s| s.mirror_session(emitted.as_ref()));
        session.set(emitted);
    }));
    StoredValue::new_local(subscription);

    Effect::new(move |_| sync_scroll_lock(&WebDocument, &state.get()));

    let routes = StoredValue::new_local(RouteWatcher::new(navigator.current_path()));
    Effect::new(move |_| {
        let path = pathname.get();
        if routes.with_value(|watcher| watcher.path_changed(&path)) {
            let (is_mobile, is_open) = state.with_untracked(|s| (s.is_mobile, s.is_open));
            shell.with_triggers(|triggers| triggers.route_changed(is_mobile, is_open));
        }
    });

    let actions = StoredValue::new_local(Rc::new(SessionActions::new(auth, navigator)));
    let on_login = Callback::new(move |_| actions.with_value(|a| a.login(&state)));
    let on_logout = Callback::new(move |_| {
        let actions = actions.get_value();
        spawn_local(async move {
            if let Err(err) = actions.logout(&state).await {
                log::debug!("logout left the sidebar unchanged: {}", err);
            }
        });
    });

    let feedback = StoredValue::new_local(TapFeedback::new(
        shell.scheduler(),
        shell.timings.link_feedback_revert,
    ));
    let tapped = RwSignal::new(None::<&'static str>);

    let is_mobile = move || state.with(|s| s.is_mobile);
    let is_open = move || state.with(|s| s.is_open);
    let collapsed = Signal::derive(move || !is_mobile() && !is_open());

    let on_overlay = move |ev: web_sys::MouseEvent| {
        let ev: &web_sys::Event = &ev;
        let (is_mobile, is_open) = state.with_untracked(|s| (s.is_mobile, s.is_open));
        shell.with_triggers(|triggers| triggers.overlay_clicked(ev as &dyn TriggerEvent, is_mobile, is_open));
    };

    view! {
        <aside
            class="sidebar"
            class:sidebar--mobile=is_mobile
            class:sidebar--open=is_open
            class:sidebar--collapsed=move || collapsed.get()
        >
            <div class="sidebar__header">
                <Show when=move || !collapsed.get()>
                    <span class="sidebar__brand">"Navigator"</span>
                </Show>
                <Show when=move || !is_mobile()>
                    <button
                        class="sidebar__collapse"
                        title=move || if is_open() { "Collapse sidebar" } else { "Expand sidebar" }
                        on:click=move |_| shell.with_triggers(|triggers| triggers.collapse_clicked())
                    >
                        {move || if is_open() { icon("chevron-left") } else { icon("chevron-right") }}
                    </button>
                </Show>
            </div>

            <nav class="sidebar__nav">
                {SECTIONS.iter().map(|section| view! {
                    <div class="sidebar__section">
                        <Show when=move || !collapsed.get()>
                            <div class="sidebar__section-title">{section.title}</div>
                        </Show>
                        {section.links.iter().map(|link| {
                            let path = link.path;
                            view! {
                                <A href=path>
                                    <span
                                        class="sidebar__link"
                                        class:sidebar__link--active=move || is_active(path, &pathname.get())
                                        class:sidebar__link--tapped=move || tapped.get() == Some(path)
                                        title=link.label
                                        on:click=move |_| {
                                            let mobile = state.with_untracked(|s| s.is_mobile);
                                            feedback.with_value(|f| {
                                                f.tap(path, mobile, Rc::new(move |mark: Option<&'static str>| tapped.set(mark)))
                                            });
                                        }
                                    >
                                        {icon(link.icon)}
                                        <Show when=move || !collapsed.get()>
                                            <span class="sidebar__link-label">{link.label}</span>
                                        </Show>
                                    </span>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </nav>

            <ThemeSwitch collapsed=collapsed/>

            <UserFooter
                session=session
                state=state
                collapsed=collapsed
                on_login=on_login
                on_logout=on_logout
            />
        </aside>

        <Show when=move || is_mobile() && is_open()>
            <div class="sidebar-overlay" on:click=on_overlay></div>
        </Show>

        <Snackbar state=state/>
    }
}
