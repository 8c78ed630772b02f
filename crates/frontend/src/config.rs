//! Fixed layout constants and tunable interaction delays for the shell.

use std::time::Duration;

/// Viewports at or below this width (CSS px) use the mobile overlay layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Body class that locks page scrolling while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Delays applied by the sidebar triggers.
///
/// The defaults absorb duplicate touch/click dispatch on mobile browsers. They
/// only guarantee that a request is issued after the delay, nothing stronger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellTimings {
    /// Hamburger press -> toggle request.
    pub hamburger_debounce: Duration,
    /// Overlay click -> close request.
    pub overlay_close_delay: Duration,
    /// How long a tapped link keeps its pressed styling on mobile.
    pub link_feedback_revert: Duration,
}

impl Default for ShellTimings {
    fn default() -> Self {
        Self {
            hamburger_debounce: Duration::from_millis(10),
            overlay_close_delay: Duration::from_millis(50),
            link_feedback_revert: Duration::from_millis(150),
        }
    }
}
