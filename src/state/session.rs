//! The session store and route-guard decisions.
//!
//! One `Session` handle is created by the root component and provided via
//! context; everything that needs authentication state receives this explicit
//! object instead of poking at storage or globals. The handle is `Copy` (it
//! wraps signals), so closures capture it freely.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::storage;

/// What a guarded route should do, given the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still restoring; render a placeholder.
    Loading,
    Allow,
    RedirectLogin,
    RedirectDashboard,
}

/// Decision for routes that require authentication (and possibly the admin
/// role). Pure so the redirect matrix is testable.
pub fn protected_outcome(
    loading: bool,
    authenticated: bool,
    admin: bool,
    admin_only: bool,
) -> GuardOutcome {
    if loading {
        GuardOutcome::Loading
    } else if !authenticated {
        GuardOutcome::RedirectLogin
    } else if admin_only && !admin {
        GuardOutcome::RedirectDashboard
    } else {
        GuardOutcome::Allow
    }
}

/// Decision for the public pages (landing, login, signup): authenticated
/// users are bounced to the dashboard.
pub fn public_outcome(loading: bool, authenticated: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Loading
    } else if authenticated {
        GuardOutcome::RedirectDashboard
    } else {
        GuardOutcome::Allow
    }
}

/// A restored session is only valid with both halves present; a token without
/// a profile (or the reverse) is treated as logged out.
pub fn restored_pair(token: Option<String>, user: Option<User>) -> Option<(String, User)> {
    match (token, user) {
        (Some(token), Some(user)) => Some((token, user)),
        _ => None,
    }
}

/// The client-held credential and profile identifying the current user.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
}

impl Session {
    /// A fresh, still-loading session. Call [`Session::restore`] once after
    /// construction.
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(None),
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    /// Rehydrate from local storage on application start. A half-written
    /// session is discarded rather than trusted.
    pub fn restore(self) {
        match restored_pair(storage::read_token(), storage::read_user()) {
            Some((token, user)) => {
                log::debug!("session restored for {}", user.email);
                self.token.set(Some(token));
                self.user.set(Some(user));
            }
            None => {
                storage::clear_session();
            }
        }
        self.loading.set(false);
    }

    /// Exchange credentials for a session and persist it. Transport errors
    /// propagate to the caller; nothing retries.
    pub async fn login(self, api: &Api, email: &str, password: &str) -> Result<User, ApiError> {
        let response = api.authenticate(email, password).await?;
        self.establish(&response.access_token, response.user.clone());
        Ok(response.user)
    }

    fn establish(self, token: &str, user: User) {
        storage::write_session(token, &user);
        self.token.set(Some(token.to_owned()));
        self.user.set(Some(user));
    }

    /// Drop the stored credential and profile.
    pub fn logout(self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
        log::debug!("session cleared");
    }

    pub fn is_authenticated(self) -> bool {
        self.token.get().is_some()
    }

    pub fn is_admin(self) -> bool {
        self.user.get().is_some_and(|user| user.role == Role::Admin)
    }

    pub fn current_user(self) -> Option<User> {
        self.user.get()
    }

    pub fn guard(self, admin_only: bool) -> GuardOutcome {
        protected_outcome(
            self.loading.get(),
            self.is_authenticated(),
            self.is_admin(),
            admin_only,
        )
    }

    pub fn public_guard(self) -> GuardOutcome {
        public_outcome(self.loading.get(), self.is_authenticated())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
