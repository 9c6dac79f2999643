//! User model derived from bearer-token claims.

use serde::{Deserialize, Serialize};

/// Gender as transmitted on the wire (`m` | `f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// User profile built client-side from the login token's claims segment.
///
/// There is no profile endpoint; whatever the server chose to embed in the
/// token at issuance is all the client knows. Claims absent from the token
/// decode to empty strings or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Email address (the token's `sub` claim)
    pub email: String,
    /// Display name
    pub name: String,
    /// Login username
    pub username: String,
    /// Phone number
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Birth date (`YYYY-MM-DD`) if the token carried one
    pub birth_date: Option<String>,
    /// Gender if the token carried one
    pub gender: Option<Gender>,
    /// Whether the account's email was verified at token issuance.
    /// Not refreshed until the next login.
    pub is_verified: bool,
    /// Role claim (`user`, `admin`, ...)
    pub role: String,
}
