// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gymtrack client core: authentication and session flow, offline catalog
//! mirror, and connectivity guard.
//!
//! This crate is embedded by the mobile shells; the screen layer calls into
//! `AppCore` and renders whatever comes back. The shell is expected to call
//! `logging::init()` once at startup and to feed platform reachability
//! changes into `AppCore::connectivity`.

pub mod config;
pub mod connectivity;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod reset;
pub mod services;
pub mod session;
pub mod validate;

use config::Config;
use connectivity::ConnectivityMonitor;
use db::CatalogMirror;
use error::Result;
use services::{AuthClient, AuthService};
use session::SessionStore;

/// Shared application core handed to the screen layer.
pub struct AppCore {
    pub config: Config,
    pub auth: AuthService,
    pub session: SessionStore,
    pub connectivity: ConnectivityMonitor,
    pub catalog: CatalogMirror,
}

impl AppCore {
    /// Wire up the core from configuration. Opens the catalog mirror (and
    /// creates its schema) as part of startup; safe on every cold start.
    pub fn new(config: Config) -> Result<Self> {
        let session = SessionStore::new();
        let connectivity = ConnectivityMonitor::new();
        let client = AuthClient::new(config.api_base_url.clone());
        let auth = AuthService::new(client, session.clone(), connectivity.clone());
        let catalog = CatalogMirror::open(&config.catalog_db_path)?;

        tracing::info!(api = %config.api_base_url, "Gymtrack core initialized");

        Ok(Self {
            config,
            auth,
            session,
            connectivity,
            catalog,
        })
    }

    /// Start a password-reset flow bound to this core's auth service.
    pub fn reset_flow(&self) -> reset::ResetFlow {
        reset::ResetFlow::new(self.auth.clone())
    }
}
