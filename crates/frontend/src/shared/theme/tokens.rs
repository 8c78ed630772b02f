//! Static light/dark palettes and the document writer that publishes them.

use crate::shared::document::DocumentSink;

pub const DARK_MODE_ROOT_CLASS: &str = "dark-mode";
pub const DARK_THEME_BODY_CLASS: &str = "dark-theme";
pub const THEME_TRANSITION: &str = "background 0.3s ease, color 0.3s ease, border-color 0.3s ease";

/// Named colors for one appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub sidebar_bg: &'static str,
    pub sidebar_hover: &'static str,
    pub sidebar_active: &'static str,
    pub sidebar_active_border: &'static str,
    pub sidebar_text: &'static str,
    pub sidebar_icon: &'static str,
    pub sidebar_active_text: &'static str,
    pub footer_bg: &'static str,
    pub footer_text: &'static str,
    pub accent: &'static str,
    pub page_background: &'static str,
    pub page_text: &'static str,
}

pub const LIGHT: Palette = Palette {
    sidebar_bg: "linear-gradient(180deg, #ffffff 0%, #f1f5f9 100%)",
    sidebar_hover: "rgba(59, 130, 246, 0.08)",
    sidebar_active: "rgba(59, 130, 246, 0.14)",
    sidebar_active_border: "#3b82f6",
    sidebar_text: "#334155",
    sidebar_icon: "#64748b",
    sidebar_active_text: "#1d4ed8",
    footer_bg: "#f8fafc",
    footer_text: "#475569",
    accent: "#3b82f6",
    page_background: "#f8fafc",
    page_text: "#0f172a",
};

pub const DARK: Palette = Palette {
    sidebar_bg: "linear-gradient(180deg, #1e293b 0%, #0f172a 100%)",
    sidebar_hover: "rgba(148, 163, 184, 0.12)",
    sidebar_active: "rgba(96, 165, 250, 0.18)",
    sidebar_active_border: "#60a5fa",
    sidebar_text: "#cbd5e1",
    sidebar_icon: "#94a3b8",
    sidebar_active_text: "#bfdbfe",
    footer_bg: "#0b1220",
    footer_text: "#94a3b8",
    accent: "#60a5fa",
    page_background: "#0f172a",
    page_text: "#e2e8f0",
};

impl Palette {
    /// Token suffixes (after `--theme-`) paired with their values.
    fn entries(&self) -> [(&'static str, &'static str); 10] {
        [
            ("sidebar-bg", self.sidebar_bg),
            ("sidebar-hover", self.sidebar_hover),
            ("sidebar-active", self.sidebar_active),
            ("sidebar-active-border", self.sidebar_active_border),
            ("sidebar-text", self.sidebar_text),
            ("sidebar-icon", self.sidebar_icon),
            ("sidebar-active-text", self.sidebar_active_text),
            ("footer-bg", self.footer_bg),
            ("footer-text", self.footer_text),
            ("accent", self.accent),
        ]
    }
}

/// The full set of CSS custom properties written on the document root.
///
/// Light values use the plain names, dark values the `-dark` suffixed ones.
/// The set does not depend on the current selection; stylesheets pick the
/// variant through the `dark-mode` root class.
pub fn token_set() -> Vec<(String, &'static str)> {
    let light = LIGHT
        .entries()
        .into_iter()
        .map(|(name, value)| (format!("--theme-{name}"), value));
    let dark = DARK
        .entries()
        .into_iter()
        .map(|(name, value)| (format!("--theme-{name}-dark"), value));
    light
        .chain(dark)
        .chain(std::iter::once(("--theme-transition".to_string(), THEME_TRANSITION)))
        .collect()
}

pub fn palette(is_dark_mode: bool) -> &'static Palette {
    if is_dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

/// Publishes the theme to the document.
///
/// This is the only writer of theme state on the document. Calls are
/// idempotent and the latest call wins.
pub fn apply_theme(document: &dyn DocumentSink, is_dark_mode: bool) {
    for (name, value) in token_set() {
        document.set_root_property(&name, value);
    }

    let active = palette(is_dark_mode);
    document.set_root_class(DARK_MODE_ROOT_CLASS, is_dark_mode);
    document.set_body_class(DARK_THEME_BODY_CLASS, is_dark_mode);
    document.set_body_style("background", active.page_background);
    document.set_body_style("color", active.page_text);

    log::debug!("theme applied: dark_mode={}", is_dark_mode);
}
