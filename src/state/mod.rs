//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `login`, `ui`, `vault`) so
//! individual components can depend on small focused models. Each model is
//! held in an `RwSignal` provided via context by the root `App`; mutation of
//! authentication state flows exclusively through the session store's
//! `login`/`logout` operations.

pub mod login;
pub mod session;
pub mod ui;
pub mod vault;

use crate::util::storage::LocalStorage;

/// Session store wired to browser storage, as provided via context.
pub type AppSessionStore = session::SessionStore<LocalStorage>;

/// Vault store wired to browser storage, as provided via context.
pub type AppVaultStore = vault::VaultStore<LocalStorage>;
