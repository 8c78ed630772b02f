use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::service::{AuthService, HttpAuthService};

/// Handle to the auth collaborator, shareable through Leptos context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    service: StoredValue<Rc<dyn AuthService>, LocalStorage>,
}

impl AuthContext {
    pub fn new(service: Rc<dyn AuthService>) -> Self {
        Self {
            service: StoredValue::new_local(service),
        }
    }

    pub fn service(&self) -> Rc<dyn AuthService> {
        self.service.get_value()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let service = Rc::new(HttpAuthService::new());

    // Try to restore session from localStorage on mount
    let restoring = service.clone();
    spawn_local(async move {
        restoring.restore().await;
    });

    provide_context(AuthContext::new(service));

    children()
}

/// Hook to access the auth collaborator
pub fn use_auth() -> Rc<dyn AuthService> {
    use_context::<AuthContext>()
        .expect("AuthProvider not found in component tree")
        .service()
}
