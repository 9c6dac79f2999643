// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state with immutable snapshots and change notification.
//!
//! Exactly one session exists process-wide. Dependent views hold a
//! `watch::Receiver` and redirect to the login screen whenever the value
//! becomes `None`. The store is an explicit handle injected into whatever
//! needs it rather than ambient global state.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::UserRecord;
use crate::services::token;

/// An established session. The struct existing at all is the invariant:
/// a user record is held iff a token is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque bearer token presented on authenticated requests
    pub token: String,
    /// User record decoded from the token at login
    pub user: UserRecord,
}

/// Cheap-to-clone handle to the process-wide session slot.
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Store token and user atomically; readers observe both or neither.
    ///
    /// A second login replaces the first session.
    pub fn login(&self, token: String, user: UserRecord) -> Arc<Session> {
        let session = Arc::new(Session { token, user });
        self.tx.send_replace(Some(session.clone()));
        tracing::info!(email = %session.user.email, "Session established");
        session
    }

    /// Clear the session. Subscribed views observe `None` and treat the
    /// process as unauthenticated.
    pub fn logout(&self) {
        let had_session = self.tx.send_replace(None).is_some();
        if had_session {
            tracing::info!("Session cleared");
        }
    }

    /// Immutable snapshot of the current session, if any.
    pub fn snapshot(&self) -> Option<Arc<Session>> {
        self.tx.borrow().clone()
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Session>>> {
        self.tx.subscribe()
    }

    /// Re-validate that the held token is still structurally sound.
    ///
    /// No server round-trip: a token revoked server-side keeps passing this
    /// check until the next network call comes back rejected.
    pub fn check_auth(&self) -> bool {
        match self.snapshot() {
            Some(session) => token::is_well_formed(&session.token),
            None => false,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
