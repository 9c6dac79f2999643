// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gymtrack API client for the authentication flow.
//!
//! Handles:
//! - Registration, login, email verification, code resend
//! - Forgot/reset password
//! - Client-side user record construction from token claims
//!
//! Every operation is a single POST against the configured base URL with a
//! JSON body. Emails are lower-cased and trimmed before transmission on
//! every operation; the server matches emails case-insensitively only
//! because the client upholds this uniformly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::connectivity::ConnectivityMonitor;
use crate::error::{AppError, Result};
use crate::models::{Gender, UserRecord};
use crate::services::token;
use crate::session::{Session, SessionStore};
use crate::validate;

/// Low-level auth API client.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterPayload {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    pub user_name: String,
    /// `YYYY-MM-DD`
    #[validate(custom(function = crate::validate::birth_date_rule))]
    pub birth_date: String,
    pub gender: Gender,
}

/// Successful login response, with the user record already decoded from the
/// token's claims segment.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

/// Registration succeeded; the account cannot log in until the email is
/// verified with the code sent to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// The (normalized) email the verification code was sent to
    pub email: String,
}

/// Raw `/login` response envelope. The server also returns a `user` object,
/// but the client derives its record from the token claims instead.
#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    access_token: Option<String>,
}

impl AuthClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a registration. Expects 201; the account still needs email
    /// verification before login is usable.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RegistrationOutcome> {
        let mut payload = payload.clone();
        payload.email = validate::normalize_email(&payload.email);

        let response = self.post_json("/register", &payload).await?;
        self.check_response(response).await?;

        tracing::info!(email = %payload.email, "Registration accepted, verification pending");
        Ok(RegistrationOutcome {
            email: payload.email,
        })
    }

    /// Submit credentials and build the user record from the returned
    /// token's claims segment.
    ///
    /// A response without `access_token` fails rather than proceeding; a
    /// token that is not three dot-separated segments of decodable claims
    /// fails with `MalformedToken`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({
            "email": validate::normalize_email(email),
            "password": password,
        });

        let response = self.post_json("/login", &body).await?;
        let envelope: LoginEnvelope = self.check_response_json(response).await?;

        let token = envelope.access_token.ok_or_else(|| {
            AppError::MalformedToken("login response missing access_token".to_string())
        })?;

        let user: UserRecord = token::decode_claims(&token)?.into();

        tracing::debug!(email = %user.email, verified = user.is_verified, "Login response decoded");
        Ok(LoginResponse { token, user })
    }

    /// Confirm an email with the code sent to it.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<()> {
        let body = serde_json::json!({
            "email": validate::normalize_email(email),
            "verification_code": code,
        });

        let response = self.post_json("/verify_email", &body).await?;
        self.check_response(response).await?;

        tracing::info!("Email verified");
        Ok(())
    }

    /// Ask the server to send a fresh verification code.
    ///
    /// The body is the bare email string, not wrapped in an object.
    pub async fn resend_verification_code(&self, email: &str) -> Result<()> {
        let body = validate::normalize_email(email);

        let response = self.post_json("/resend-verification", &body).await?;
        self.check_response(response).await
    }

    /// Start the password-reset flow. Body is the bare email string.
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        let body = validate::normalize_email(email);

        let response = self.post_json("/forgot_password", &body).await?;
        self.check_response(response).await
    }

    /// Complete the password-reset flow with the emailed code.
    pub async fn reset_password(
        &self,
        email: &str,
        reset_code: &str,
        new_password: &str,
    ) -> Result<()> {
        let body = serde_json::json!({
            "email": validate::normalize_email(email),
            "new_password": new_password,
            "reset_code": reset_code,
        });

        let response = self.post_json("/reset_password", &body).await?;
        self.check_response(response).await?;

        tracing::info!("Password reset complete");
        Ok(())
    }

    /// Generic JSON POST with transport errors mapped to `Network`.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        self.http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: server_message(&body),
        })
    }

    /// Check response and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status,
                message: server_message(&body),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("JSON parse error: {}", e)))
    }
}

/// Extract `message`/`detail` from a JSON error body.
///
/// An unparseable body yields `None` and the caller substitutes a generic
/// message; it must never crash the flow.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("detail"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// AuthService - high-level flow: guard, validate, request, session
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a login attempt that the HTTP layer accepted.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Session established.
    Authenticated(Arc<Session>),
    /// Account exists but the email is not verified yet: no session is
    /// established and the UI routes to the verification flow. This is a
    /// control-flow branch, not an error.
    NeedsVerification { email: String },
}

/// High-level authentication service wired to the session store and the
/// connectivity guard. This is what the screens call.
#[derive(Clone)]
pub struct AuthService {
    client: AuthClient,
    session: SessionStore,
    connectivity: ConnectivityMonitor,
}

impl AuthService {
    pub fn new(
        client: AuthClient,
        session: SessionStore,
        connectivity: ConnectivityMonitor,
    ) -> Self {
        Self {
            client,
            session,
            connectivity,
        }
    }

    // ─── Registration & verification ─────────────────────────────────────────

    /// Validate and submit a registration.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RegistrationOutcome> {
        self.connectivity.ensure_online()?;

        // Normalize before validating so "  User@Example.com " passes the
        // email rule the same way it will be transmitted.
        let mut payload = payload.clone();
        payload.email = validate::normalize_email(&payload.email);

        payload
            .validate()
            .map_err(|e| AppError::Validation(validate::first_validation_message(&e)))?;

        self.client.register(&payload).await
    }

    /// Sanitize and submit a verification code.
    ///
    /// The raw input is coerced to digits (capped at 10) and must be 6-10
    /// digits long before any request is sent.
    pub async fn verify_email(&self, email: &str, raw_code: &str) -> Result<()> {
        self.connectivity.ensure_online()?;

        let code = validate::sanitize_code(raw_code);
        validate::validate_code(&code)?;

        self.client.verify_email(email, &code).await
    }

    /// Ask for a fresh verification code.
    pub async fn resend_verification_code(&self, email: &str) -> Result<()> {
        self.connectivity.ensure_online()?;
        self.client.resend_verification_code(email).await
    }

    // ─── Login & session ─────────────────────────────────────────────────────

    /// Log in. Establishes a session only for verified accounts; unverified
    /// accounts get the `NeedsVerification` branch and no session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        self.connectivity.ensure_online()?;

        let response = self.client.login(email, password).await?;

        if !response.user.is_verified {
            tracing::info!(email = %response.user.email, "Login deferred: email not verified");
            return Ok(LoginOutcome::NeedsVerification {
                email: response.user.email,
            });
        }

        let session = self.session.login(response.token, response.user);
        Ok(LoginOutcome::Authenticated(session))
    }

    /// Clear the session; dependent screens observe the change and redirect.
    pub fn logout(&self) {
        self.session.logout();
    }

    // ─── Password reset ──────────────────────────────────────────────────────

    /// Start the reset flow by requesting a code.
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        self.connectivity.ensure_online()?;
        self.client.forgot_password(email).await
    }

    /// Complete the reset flow. The new password and code are validated
    /// locally before any request is attempted.
    pub async fn reset_password(
        &self,
        email: &str,
        raw_reset_code: &str,
        new_password: &str,
    ) -> Result<()> {
        self.connectivity.ensure_online()?;

        validate::validate_password(new_password)?;
        let code = validate::sanitize_code(raw_reset_code);
        validate::validate_code(&code)?;

        self.client.reset_password(email, &code, new_password).await
    }
}
