// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password-reset flow as a single state machine.
//!
//! Both entry points (the dedicated reset screen and the form embedded in
//! the login screen) drive this one flow, parameterized by where the email
//! comes from, instead of duplicating the screen logic.

use crate::services::AuthService;

/// Observable state of the reset flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetState {
    /// Nothing requested yet.
    Idle,
    /// A code was sent (or already issued) to `email`; waiting for input.
    AwaitingCode { email: String },
    /// Reset request in flight.
    Submitting { email: String },
    /// Password changed; the flow is finished.
    Done { email: String },
    /// A step failed. `email` is retained when known so the user can retry
    /// without retyping it.
    Failed {
        email: Option<String>,
        message: String,
    },
}

/// Password-reset state machine driven by one component.
pub struct ResetFlow {
    auth: AuthService,
    state: ResetState,
}

impl ResetFlow {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            state: ResetState::Idle,
        }
    }

    pub fn state(&self) -> &ResetState {
        &self.state
    }

    /// Request a reset code for `email` and move to `AwaitingCode`.
    ///
    /// Valid from any state except `Submitting`.
    pub async fn request_code(&mut self, email: &str) -> &ResetState {
        if matches!(self.state, ResetState::Submitting { .. }) {
            return &self.state;
        }

        let email = crate::validate::normalize_email(email);
        self.state = match self.auth.forgot_password(&email).await {
            Ok(()) => ResetState::AwaitingCode { email },
            Err(e) => ResetState::Failed {
                email: Some(email),
                message: e.user_message(),
            },
        };
        &self.state
    }

    /// Enter `AwaitingCode` for an email whose code was already issued
    /// elsewhere (the embedded-in-login-form entry point).
    pub fn begin_with_pending_code(&mut self, email: &str) -> &ResetState {
        if !matches!(self.state, ResetState::Submitting { .. }) {
            self.state = ResetState::AwaitingCode {
                email: crate::validate::normalize_email(email),
            };
        }
        &self.state
    }

    /// Submit the emailed code and the new password.
    ///
    /// Local validation failures (short password, short code) fail the flow
    /// before any request is attempted. Valid only from `AwaitingCode`.
    pub async fn submit(&mut self, raw_code: &str, new_password: &str) -> &ResetState {
        let email = match &self.state {
            ResetState::AwaitingCode { email } => email.clone(),
            _ => return &self.state,
        };

        self.state = ResetState::Submitting {
            email: email.clone(),
        };

        self.state = match self
            .auth
            .reset_password(&email, raw_code, new_password)
            .await
        {
            Ok(()) => ResetState::Done { email },
            Err(e) => ResetState::Failed {
                email: Some(email),
                message: e.user_message(),
            },
        };
        &self.state
    }

    /// After a failure, go back to code entry (email known) or the start.
    pub fn retry(&mut self) -> &ResetState {
        if let ResetState::Failed { email, .. } = &self.state {
            self.state = match email {
                Some(email) => ResetState::AwaitingCode {
                    email: email.clone(),
                },
                None => ResetState::Idle,
            };
        }
        &self.state
    }

    /// Abandon the flow.
    pub fn reset(&mut self) -> &ResetState {
        self.state = ResetState::Idle;
        &self.state
    }
}

impl ResetState {
    /// Match-free check used by screens to know when to pop the flow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResetState::Done { .. })
    }
}
