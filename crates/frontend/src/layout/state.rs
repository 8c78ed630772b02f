//! Sidebar state and its transitions.
//!
//! A single [`SidebarState`] value is owned by the shell context. Every
//! open/close request from any trigger goes through [`SidebarState::reduce`].

use crate::config::MOBILE_BREAKPOINT_PX;
use contracts::system::auth::Session;
use leptos::prelude::*;
use std::cell::RefCell;

pub const LOGOUT_SUCCESS_MESSAGE: &str = "You have been logged out successfully";
pub const LOGOUT_FAILURE_MESSAGE: &str = "Failed to log out. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    Open,
    Close,
    Toggle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub open: bool,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
    pub is_mobile: bool,
    pub show_logout_popup: bool,
    pub snackbar: Notification,
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

impl SidebarState {
    /// Initial state for a viewport: expanded on desktop, hidden on mobile.
    pub fn for_viewport(width: f64) -> Self {
        let is_mobile = is_mobile_width(width);
        Self {
            is_open: !is_mobile,
            is_mobile,
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, action: SidebarAction) {
        self.is_open = match action {
            SidebarAction::Open => true,
            SidebarAction::Close => false,
            SidebarAction::Toggle => !self.is_open,
        };
    }

    /// Mobile layout with the menu showing; the page behind must not scroll.
    pub fn wants_scroll_lock(&self) -> bool {
        self.is_mobile && self.is_open
    }

    /// Returns `true` when the layout switched between mobile and desktop.
    pub fn set_mobile(&mut self, is_mobile: bool) -> bool {
        let changed = self.is_mobile != is_mobile;
        self.is_mobile = is_mobile;
        changed
    }

    /// Reacts to a session emission. Losing the session hides the popup.
    pub fn mirror_session(&mut self, session: Option<&Session>) {
        if session.is_none() {
            self.show_logout_popup = false;
        }
    }

    pub fn toggle_logout_popup(&mut self, has_session: bool) {
        self.show_logout_popup = has_session && !self.show_logout_popup;
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.snackbar = Notification {
            open: true,
            message: message.into(),
        };
    }

    pub fn dismiss_notification(&mut self) {
        self.snackbar.open = false;
    }
}

/// Owner of the sidebar state.
pub trait SidebarStore {
    fn snapshot(&self) -> SidebarState;
    fn update_state(&self, f: impl FnOnce(&mut SidebarState));

    fn dispatch(&self, action: SidebarAction) {
        self.update_state(|state| state.reduce(action));
    }
}

impl SidebarStore for RwSignal<SidebarState> {
    fn snapshot(&self) -> SidebarState {
        self.get_untracked()
    }

    fn update_state(&self, f: impl FnOnce(&mut SidebarState)) {
        self.update(f);
    }
}

impl SidebarStore for RefCell<SidebarState> {
    fn snapshot(&self) -> SidebarState {
        self.borrow().clone()
    }

    fn update_state(&self, f: impl FnOnce(&mut SidebarState)) {
        f(&mut self.borrow_mut());
    }
}
