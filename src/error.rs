// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types surfaced to the embedding UI.
//!
//! Every failure is returned to the initiating screen, which renders it as a
//! blocking alert and restores its pre-submission state. Nothing here is
//! fatal to the process and nothing is retried automatically.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The connectivity pre-flight guard tripped before a request was sent.
    #[error("No internet connection")]
    NetworkUnavailable,

    /// The transport failed mid-flight (DNS, TLS, disconnect).
    #[error("Network request failed: {0}")]
    Network(String),

    /// Non-2xx response, with the server-provided message when one parsed.
    #[error("Server returned HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// The login response token could not be split into three segments or
    /// its claims segment could not be decoded.
    #[error("Malformed access token: {0}")]
    MalformedToken(String),

    /// Client-side field constraint violated before any request was sent.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Catalog store error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Standard message shown when the connectivity guard trips.
pub const NO_INTERNET_MESSAGE: &str = "No internet connection. Check your network and try again.";

/// Fallback shown when the server gave no usable error message.
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    /// Best available user-facing message for the screen-boundary alert.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NetworkUnavailable => NO_INTERNET_MESSAGE.to_string(),
            AppError::Network(_) => "Network error. Please try again.".to_string(),
            AppError::Http { message, .. } => message
                .clone()
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            AppError::MalformedToken(_) => {
                "The server returned an invalid session. Please log in again.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(_) | AppError::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
