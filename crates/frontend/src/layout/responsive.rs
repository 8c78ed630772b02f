//! Viewport tracking against the mobile breakpoint.

use crate::config::MENU_OPEN_CLASS;
use crate::layout::state::{is_mobile_width, SidebarState, SidebarStore};
use crate::shared::document::{DocumentSink, WebDocument};
use gloo_events::EventListener;
use leptos::prelude::*;
use web_sys::window;

/// Current `window.innerWidth`, or desktop width outside a browser.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}

/// Computes the mobile flag for `width`.
///
/// A desktop width never keeps the mobile scroll lock on the body.
pub fn observe_viewport(document: &dyn DocumentSink, width: f64) -> bool {
    let is_mobile = is_mobile_width(width);
    if !is_mobile && document.has_body_class(MENU_OPEN_CLASS) {
        log::debug!("desktop width {}: clearing {}", width, MENU_OPEN_CLASS);
        document.set_body_class(MENU_OPEN_CLASS, false);
    }
    is_mobile
}

/// Feeds one viewport measurement into the sidebar state. Returns whether
/// the mobile flag changed.
pub fn apply_viewport_width(
    document: &dyn DocumentSink,
    store: &impl SidebarStore,
    width: f64,
) -> bool {
    let is_mobile = observe_viewport(document, width);
    if store.snapshot().is_mobile == is_mobile {
        return false;
    }
    log::debug!("viewport {}px: is_mobile={}", width, is_mobile);
    store.update_state(|s| {
        s.set_mobile(is_mobile);
    });
    true
}

pub fn sync_scroll_lock(document: &dyn DocumentSink, state: &SidebarState) {
    document.set_body_class(MENU_OPEN_CLASS, state.wants_scroll_lock());
}

/// Resize and orientation listeners; both are removed when this is dropped.
pub struct ViewportListener {
    _resize: EventListener,
    _orientation: EventListener,
}

impl ViewportListener {
    pub fn install(on_width: impl Fn(f64) + 'static) -> Option<Self> {
        let window = window()?;
        let on_width = std::rc::Rc::new(on_width);
        let resize = {
            let on_width = on_width.clone();
            EventListener::new(&window, "resize", move |_| on_width(viewport_width()))
        };
        let orientation =
            EventListener::new(&window, "orientationchange", move |_| on_width(viewport_width()));
        Some(Self {
            _resize: resize,
            _orientation: orientation,
        })
    }
}

/// Keeps `state.is_mobile` in sync with the viewport for the lifetime of the
/// calling component.
pub fn use_responsive_monitor(state: RwSignal<SidebarState>) {
    let apply = move |width: f64| {
        apply_viewport_width(&WebDocument, &state, width);
    };

    apply(viewport_width());

    // Dropped with the owning component, which removes both listeners.
    StoredValue::new_local(ViewportListener::install(apply));
}
