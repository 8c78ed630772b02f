pub mod api;
pub mod context;
pub mod error;
pub mod service;
pub mod storage;

pub use context::{use_auth, AuthProvider};
pub use error::AuthError;
pub use service::{AuthService, SessionListener, Subscription};
