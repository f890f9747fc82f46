//! Top-level pages: the unauthenticated login screen and the portal.

pub mod login;
pub mod portal;
