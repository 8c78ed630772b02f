//! Wire types shared between the navigation shell and the auth backend.

pub mod system;
