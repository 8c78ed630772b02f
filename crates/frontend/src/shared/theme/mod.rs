//! Dark/light theme context.
//!
//! The selection lives in a [`ThemeContext`] signal and is persisted in
//! localStorage. Document writes go through [`tokens::apply_theme`].

pub mod theme_switch;
pub mod tokens;

pub use theme_switch::ThemeSwitch;

use crate::shared::document::WebDocument;
use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "app_theme";

fn load_dark_mode_from_storage() -> Option<bool> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| parse_stored_theme(&value))
}

fn save_dark_mode_to_storage(is_dark_mode: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, stored_theme_value(is_dark_mode));
    }
}

fn parse_stored_theme(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

fn stored_theme_value(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        "dark"
    } else {
        "light"
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark_mode: RwSignal<bool>,
}

impl ThemeContext {
    pub fn toggle_theme(&self) {
        self.is_dark_mode.update(|dark| *dark = !*dark);
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode.get()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_dark_mode_from_storage().unwrap_or(false);
    let is_dark_mode = RwSignal::new(initial);

    // Synchronous write during construction: runs before the first frame is painted.
    tokens::apply_theme(&WebDocument, initial);

    Effect::new(move |previous: Option<bool>| {
        let dark = is_dark_mode.get();
        if previous.is_some_and(|previous| previous != dark) {
            tokens::apply_theme(&WebDocument, dark);
            save_dark_mode_to_storage(dark);
        }
        dark
    });

    provide_context(ThemeContext { is_dark_mode });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
