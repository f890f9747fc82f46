//! Session store: the single owner of the authenticated-user state.
//!
//! DESIGN
//! ======
//! All authentication mutations flow through [`SessionStore::login`] and
//! [`SessionStore::logout`]; consumers only read the [`Session`] snapshot.
//! Every mutating operation mirrors the in-memory state to the persistence
//! backend before returning, so memory and storage never disagree at the
//! point a caller observes them. Rehydration is best effort: a missing or
//! malformed record starts the app unauthenticated and never panics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::RecordStorage;

/// localStorage key for the persisted session record.
pub const SESSION_KEY: &str = "paperslol_session_v1";

/// Coarse permission class controlling which panel a user sees by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

/// An authenticated user. `id` is always [`derive_user_id`] of `username`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Current authentication state. The user being present *is* the
/// authenticated condition; there is no separate flag to drift out of sync.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Wire shape of the persisted record, kept compatible with earlier
/// deployments: `{"user": ..., "isAuthenticated": ...}`. A record whose
/// flag disagrees with user presence is treated as malformed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    user: Option<User>,
    is_authenticated: bool,
}

/// Derive a stable user id from a username: lower-cased, with every
/// whitespace run replaced by a single underscore. Case- or
/// whitespace-variant spellings of the same username collide on purpose.
pub fn derive_user_id(username: &str) -> String {
    let mut id = String::with_capacity(username.len());
    let mut in_whitespace = false;
    for c in username.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                id.push('_');
            }
            in_whitespace = true;
        } else {
            id.push(c);
            in_whitespace = false;
        }
    }
    id
}

/// The session store. Generic over the storage backend so the persistence
/// contract is exercised natively in tests with [`MemoryStorage`]
/// (`crate::util::storage::MemoryStorage`).
#[derive(Clone, Debug)]
pub struct SessionStore<S: RecordStorage> {
    storage: S,
    session: Session,
}

impl<S: RecordStorage> SessionStore<S> {
    /// Create an unauthenticated store. Call [`SessionStore::load`] to
    /// rehydrate a previously persisted session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Session::default(),
        }
    }

    /// Read-only snapshot of the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Rehydrate from the persisted record. Absent or malformed records
    /// leave the store unauthenticated; the error never propagates.
    pub fn load(&mut self) {
        self.session = match self.storage.read(SESSION_KEY) {
            None => Session::default(),
            Some(raw) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(record) if record.is_authenticated == record.user.is_some() => Session {
                    user: record.user,
                },
                Ok(_) => {
                    log::warn!("persisted session flag disagrees with user presence, discarding");
                    Session::default()
                }
                Err(err) => {
                    log::warn!("discarding malformed session record: {err}");
                    Session::default()
                }
            },
        };
    }

    /// Authenticate as `user` and persist the session before returning.
    pub fn login(&mut self, user: User) {
        self.session = Session { user: Some(user) };
        let record = PersistedSession {
            user: self.session.user.clone(),
            is_authenticated: true,
        };
        if let Ok(json) = serde_json::to_string(&record) {
            self.storage.write(SESSION_KEY, &json);
        }
    }

    /// Clear the session and delete the persisted record. Callers holding
    /// transient credentials (the login form's password buffer) must clear
    /// them alongside this call.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove(SESSION_KEY);
    }
}
