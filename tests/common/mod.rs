// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use gymtrack_client::connectivity::ConnectivityMonitor;
use gymtrack_client::services::{AuthClient, AuthService};
use gymtrack_client::session::SessionStore;

/// Build a structurally valid three-segment bearer token around the given
/// claims object. The signature segment is junk; the client never checks it.
#[allow(dead_code)]
pub fn token_with_claims(claims: &serde_json::Value) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        URL_SAFE_NO_PAD.encode("test-signature")
    )
}

/// Wire an auth service against a test server, returning the handles the
/// assertions need.
#[allow(dead_code)]
pub fn auth_service(base_url: &str) -> (AuthService, SessionStore, ConnectivityMonitor) {
    let session = SessionStore::new();
    let connectivity = ConnectivityMonitor::new();
    let client = AuthClient::new(base_url);
    let auth = AuthService::new(client, session.clone(), connectivity.clone());
    (auth, session, connectivity)
}
