// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token claim decoding.
//!
//! The login response carries a three-segment dot-delimited signed token.
//! The client builds its user record from the middle (claims) segment
//! instead of calling a profile endpoint, so the claims carry an explicit
//! typed contract here: `sub` is required, everything else is optional and
//! defaults to empty. The signature segment is opaque to the client and is
//! never verified on-device.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{Gender, UserRecord};

/// Typed contract for the claims the server embeds at token issuance.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Subject: the account email. The only required claim.
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub role: String,
}

impl From<TokenClaims> for UserRecord {
    fn from(claims: TokenClaims) -> Self {
        UserRecord {
            email: claims.sub,
            name: claims.name,
            username: claims.user_name,
            phone: claims.phone,
            address: claims.address,
            birth_date: claims.birth_date,
            gender: claims.gender,
            is_verified: claims.is_verified,
            role: claims.role,
        }
    }
}

/// Decode the claims segment of a bearer token.
///
/// The token must have exactly three dot-separated segments; the middle one
/// must be base64url (unpadded) and contain a JSON claims object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AppError::MalformedToken(format!(
            "expected 3 token segments, got {}",
            parts.len()
        )));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AppError::MalformedToken(format!("claims segment is not base64: {}", e)))?;

    serde_json::from_slice(&payload)
        .map_err(|e| AppError::MalformedToken(format!("claims segment is not valid JSON: {}", e)))
}

/// Structural token check used by `SessionStore::check_auth`.
///
/// Does not contact the server; a revoked token still passes until the next
/// network call is rejected.
pub fn is_well_formed(token: &str) -> bool {
    !token.is_empty() && decode_claims(token).is_ok()
}
