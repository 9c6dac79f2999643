// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Network reachability state, fed by the platform shell.
//!
//! The platform's reachability facility reports into `set_connected`; every
//! network-issuing operation runs `ensure_online` as a pre-flight guard.
//! The guard is a convenience only: connectivity can flip between the check
//! and the request, in which case the transport error surfaces instead.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{AppError, Result};

/// Cheap-to-clone handle to the current reachability flag.
#[derive(Clone)]
pub struct ConnectivityMonitor {
    tx: Arc<watch::Sender<bool>>,
}

impl ConnectivityMonitor {
    /// Starts connected; the platform callback corrects the flag as soon as
    /// it first fires.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(true);
        Self { tx: Arc::new(tx) }
    }

    /// Platform reachability callback entry point.
    pub fn set_connected(&self, connected: bool) {
        let changed = *self.tx.borrow() != connected;
        self.tx.send_replace(connected);
        if changed {
            tracing::info!(connected, "Connectivity changed");
        }
    }

    pub fn is_connected(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to reachability changes (offline banner, screen switching).
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Pre-flight guard: short-circuit with `NetworkUnavailable` when offline.
    pub fn ensure_online(&self) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(AppError::NetworkUnavailable)
        }
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}
