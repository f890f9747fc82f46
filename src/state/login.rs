//! Login form controller.
//!
//! The submit flow is a deliberate stub: any non-empty username and password
//! authenticate locally after a simulated round-trip delay. The contract
//! surface (pending flag, derived id, role taken from the selected mode) is
//! what a real identity-provider call would have to preserve.
//!
//! CANCELLATION
//! ============
//! Each attempt gets a generation token from [`LoginForm::begin_attempt`];
//! [`LoginForm::finish_attempt`] only produces a user while that token is
//! still current. Logout or a newer attempt bumps the generation, so a timer
//! that fires late cannot resurrect a dead login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

use crate::state::session::{Role, User, derive_user_id};

/// Simulated network delays, configurable instead of hard-wired timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginDelays {
    /// Round trip simulated by `submit`.
    pub login: Duration,
    /// Lifetime of the transient post-login "syncing" indicator.
    pub sync: Duration,
}

impl Default for LoginDelays {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1200),
            sync: Duration::from_millis(2000),
        }
    }
}

/// Modeled login failures. All are non-fatal: the form stays editable and
/// keeps the typed-in username and email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginError {
    EmptyUsername,
    EmptyPassword,
    AlreadyPending,
}

impl LoginError {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyUsername => "Enter a username.",
            Self::EmptyPassword => "Enter your vault password.",
            Self::AlreadyPending => "A login attempt is already in progress.",
        }
    }
}

/// Form state for the login page. The password buffer is transient: it is
/// never persisted and is cleared on success and on logout.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub mode: Role,
    pub pending: bool,
    pub error: Option<LoginError>,
    attempt: u64,
}

impl LoginForm {
    /// Validate the form and open a login attempt. Returns the attempt token
    /// to pass to [`LoginForm::finish_attempt`] after the simulated delay,
    /// or records the failure in `self.error`. At most one attempt is in
    /// flight at a time.
    pub fn begin_attempt(&mut self) -> Option<u64> {
        if self.pending {
            self.error = Some(LoginError::AlreadyPending);
            return None;
        }
        if self.username.trim().is_empty() {
            self.error = Some(LoginError::EmptyUsername);
            return None;
        }
        if self.password.is_empty() {
            self.error = Some(LoginError::EmptyPassword);
            return None;
        }
        self.error = None;
        self.pending = true;
        self.attempt += 1;
        Some(self.attempt)
    }

    /// Complete the attempt identified by `token`. Synthesizes the user from
    /// the form fields (id derived from the username, role from the selected
    /// mode) and clears the password buffer. Stale tokens are ignored.
    pub fn finish_attempt(&mut self, token: u64) -> Option<User> {
        if !self.pending || token != self.attempt {
            return None;
        }
        self.pending = false;
        let user = User {
            id: derive_user_id(&self.username),
            name: self.username.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.mode,
        };
        self.password.clear();
        Some(user)
    }

    /// Invalidate any in-flight attempt. Called on logout and on teardown so
    /// a late timer cannot complete against a gone consumer.
    pub fn cancel_pending(&mut self) {
        self.attempt += 1;
        self.pending = false;
    }

    /// Drop the transient password buffer. Part of the logout contract.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}
