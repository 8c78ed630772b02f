//! Auth collaborator interface consumed by the navigation shell.

use async_trait::async_trait;
use contracts::system::auth::Session;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::error::AuthError;
use super::{api, storage};

pub type SessionListener = Rc<dyn Fn(Option<Session>)>;

#[async_trait(?Send)]
pub trait AuthService {
    fn current_session(&self) -> Option<Session>;

    /// Registers `listener`. It is called immediately with the current
    /// session and then on every change until the subscription is dropped.
    fn subscribe(&self, listener: SessionListener) -> Subscription;

    async fn sign_in(&self, username: String, password: String) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Listener registration. Unsubscribes exactly once, on drop at the latest.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Current session plus the listeners that mirror it.
#[derive(Default)]
pub struct SessionBroadcast {
    current: RefCell<Option<Session>>,
    listeners: Rc<RefCell<Vec<(u64, SessionListener)>>>,
    next_id: Cell<u64>,
}

impl SessionBroadcast {
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self, listener: SessionListener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener.clone()));

        listener(self.current());

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    pub fn publish(&self, session: Option<Session>) {
        *self.current.borrow_mut() = session.clone();
        // Listeners may unsubscribe while being notified.
        let listeners: Vec<SessionListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        log::debug!(
            "session changed: uid={:?}, listeners={}",
            session.as_ref().map(|s| s.uid.as_str()),
            listeners.len()
        );
        for listener in listeners {
            listener(session.clone());
        }
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Maps the server's answer to a logout request.
///
/// A rejected (expired or already revoked) refresh token means the server
/// holds no session for it, so local state may be cleared. Anything else,
/// such as a network failure, is a real failure.
fn revoked_counts_as_signed_out(result: Result<(), AuthError>) -> Result<(), AuthError> {
    match result {
        Err(AuthError::Status(401 | 403)) => {
            log::info!("refresh token already rejected by the server, signing out locally");
            Ok(())
        }
        other => other,
    }
}

/// Token based auth against the backend's `/api/system/auth` endpoints.
#[derive(Default)]
pub struct HttpAuthService {
    sessions: SessionBroadcast,
}

impl HttpAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the session from stored tokens, refreshing the access token
    /// once if it was rejected. Publishes the outcome either way.
    pub async fn restore(&self) {
        let Some(access_token) = storage::access_token() else {
            self.sessions.publish(None);
            return;
        };

        match api::current_user(&access_token).await {
            Ok(user) => self.sessions.publish(Some(user.into())),
            Err(err) => {
                log::info!("stored access token rejected ({}), refreshing", err);
                match self.refresh().await {
                    Ok(session) => self.sessions.publish(Some(session)),
                    Err(err) => {
                        log::info!("session restore failed: {}", err);
                        storage::clear_tokens();
                        self.sessions.publish(None);
                    }
                }
            }
        }
    }

    async fn refresh(&self) -> Result<Session, AuthError> {
        let refresh_token = storage::refresh_token().ok_or(AuthError::Status(401))?;
        let response = api::refresh_token(refresh_token).await?;
        storage::save_access_token(&response.access_token);
        let user = api::current_user(&response.access_token).await?;
        Ok(user.into())
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    fn current_session(&self) -> Option<Session> {
        self.sessions.current()
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        self.sessions.subscribe(listener)
    }

    async fn sign_in(&self, username: String, password: String) -> Result<(), AuthError> {
        let response = api::login(username, password).await?;
        storage::save_tokens(&response.access_token, &response.refresh_token);
        self.sessions.publish(Some(response.user.into()));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(refresh_token) = storage::refresh_token() {
            revoked_counts_as_signed_out(api::logout(refresh_token).await)?;
        }
        storage::clear_tokens();
        self.sessions.publish(None);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) use fake::FakeAuth;

#[cfg(test)]
mod fake {
    use super::*;

    /// Scriptable auth collaborator for unit tests.
    #[derive(Default)]
    pub(crate) struct FakeAuth {
        pub sessions: SessionBroadcast,
        pub fail_sign_out: Cell<bool>,
        pub sign_out_calls: Cell<usize>,
    }

    impl FakeAuth {
        pub fn signed_in(session: Session) -> Self {
            let auth = Self::default();
            auth.sessions.publish(Some(session));
            auth
        }
    }

    #[async_trait(?Send)]
    impl AuthService for FakeAuth {
        fn current_session(&self) -> Option<Session> {
            self.sessions.current()
        }

        fn subscribe(&self, listener: SessionListener) -> Subscription {
            self.sessions.subscribe(listener)
        }

        async fn sign_in(&self, username: String, _password: String) -> Result<(), AuthError> {
            self.sessions.publish(Some(Session {
                uid: username.clone(),
                display_name: Some(username),
                email: None,
                photo_url: None,
            }));
            Ok(())
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.sign_out_calls.set(self.sign_out_calls.get() + 1);
            if self.fail_sign_out.get() {
                return Err(AuthError::Network("connection reset".to_string()));
            }
            self.sessions.publish(None);
            Ok(())
        }
    }
}
