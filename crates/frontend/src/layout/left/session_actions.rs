//! Login/logout orchestration for the sidebar footer.

use crate::config::{LOGIN_PATH, ROOT_PATH};
use crate::layout::state::{
    SidebarAction, SidebarStore, LOGOUT_FAILURE_MESSAGE, LOGOUT_SUCCESS_MESSAGE,
};
use crate::system::auth::{AuthError, AuthService};
use crate::system::router::Navigator;
use std::rc::Rc;

pub struct SessionActions {
    auth: Rc<dyn AuthService>,
    navigator: Rc<dyn Navigator>,
}

impl SessionActions {
    pub fn new(auth: Rc<dyn AuthService>, navigator: Rc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }

    /// Sign-in itself happens on the login route.
    pub fn login(&self, store: &impl SidebarStore) {
        self.navigator.navigate(LOGIN_PATH);
        let state = store.snapshot();
        if state.is_mobile && state.is_open {
            store.dispatch(SidebarAction::Close);
        }
    }

    /// Signs out through the auth collaborator.
    ///
    /// A failed sign-out is reported in the snackbar and otherwise leaves the
    /// state alone; nothing is retried.
    pub async fn logout(&self, store: &impl SidebarStore) -> Result<(), AuthError> {
        match self.auth.sign_out().await {
            Ok(()) => {
                log::info!("signed out");
                store.update_state(|state| {
                    state.show_logout_popup = false;
                    state.notify(LOGOUT_SUCCESS_MESSAGE);
                    if state.is_mobile && state.is_open {
                        state.reduce(SidebarAction::Close);
                    }
                });
                self.navigator.navigate(ROOT_PATH);
                Ok(())
            }
            Err(err) => {
                log::warn!("sign out failed: {}", err);
                store.update_state(|state| state.notify(LOGOUT_FAILURE_MESSAGE));
                Err(err)
            }
        }
    }
}
