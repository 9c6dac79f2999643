// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! On-device catalog mirror for the offline screen.
//!
//! A single SQLite file holds a read-only subset of the server catalog:
//! difficulties, machines, and exercises. Schema creation is idempotent and
//! runs on every open, so cold starts are safe. The only write path is a
//! one-time seed guarded by a persisted flag (`PRAGMA user_version`); after
//! that the mirror is never reconciled against the server and may go stale.

use std::sync::Mutex;

use rusqlite::{params, Connection};

use crate::error::{AppError, Result};
use crate::models::{Difficulty, Exercise, Machine, OfflineCatalog};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS difficulties (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS machines (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    dateAdded TEXT NOT NULL DEFAULT '',
    dificulty_id INTEGER REFERENCES difficulties(id),
    image TEXT,
    machine_id INTEGER REFERENCES machines(id),
    video TEXT
);
";

/// Seeded-flag value stored in `PRAGMA user_version`.
const SEEDED: i64 = 1;

/// Local read-only mirror of the exercise catalog.
///
/// The connection is opened once per process lifetime and shared behind a
/// mutex; all access after the seed is read-only.
pub struct CatalogMirror {
    conn: Mutex<Connection>,
}

impl CatalogMirror {
    /// Open (or create) the mirror at `path` and ensure the schema exists.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::with_connection(conn)
    }

    /// In-memory mirror, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA).map_err(db_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Whether the one-time seed has already run on this install.
    pub fn is_seeded(&self) -> Result<bool> {
        let conn = self.lock();
        let version: i64 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .map_err(db_err)?;
        Ok(version >= SEEDED)
    }

    /// Seed the mirror with catalog rows, at most once per install.
    ///
    /// Returns `true` when the seed ran, `false` when the persisted flag
    /// showed a previous run and nothing was written.
    pub fn seed_if_needed(&self, catalog: &OfflineCatalog) -> Result<bool> {
        let mut conn = self.lock();

        let version: i64 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .map_err(db_err)?;
        if version >= SEEDED {
            tracing::debug!("Catalog mirror already seeded, skipping");
            return Ok(false);
        }

        let tx = conn.transaction().map_err(db_err)?;

        for difficulty in &catalog.difficulties {
            tx.execute(
                "INSERT INTO difficulties (id, name) VALUES (?1, ?2)",
                params![difficulty.id, difficulty.name],
            )
            .map_err(db_err)?;
        }

        for machine in &catalog.machines {
            tx.execute(
                "INSERT INTO machines (id, name, description) VALUES (?1, ?2, ?3)",
                params![machine.id, machine.name, machine.description],
            )
            .map_err(db_err)?;
        }

        for exercise in &catalog.exercises {
            tx.execute(
                "INSERT INTO exercises
                     (id, name, description, dateAdded, dificulty_id, image, machine_id, video)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    exercise.id,
                    exercise.name,
                    exercise.description,
                    exercise.date_added,
                    exercise.dificulty_id,
                    exercise.image,
                    exercise.machine_id,
                    exercise.video,
                ],
            )
            .map_err(db_err)?;
        }

        tx.pragma_update(None, "user_version", SEEDED).map_err(db_err)?;
        tx.commit().map_err(db_err)?;

        tracing::info!(
            difficulties = catalog.difficulties.len(),
            machines = catalog.machines.len(),
            exercises = catalog.exercises.len(),
            "Catalog mirror seeded"
        );
        Ok(true)
    }

    /// Read all rows of all three tables for the offline screen.
    ///
    /// No filtering, no pagination; empty tables yield empty collections.
    pub fn load_offline_catalog(&self) -> Result<OfflineCatalog> {
        let conn = self.lock();

        let difficulties = {
            let mut stmt = conn
                .prepare("SELECT id, name FROM difficulties ORDER BY id")
                .map_err(db_err)?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Difficulty {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })
                .map_err(db_err)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(db_err)?
        };

        let machines = {
            let mut stmt = conn
                .prepare("SELECT id, name, description FROM machines ORDER BY id")
                .map_err(db_err)?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Machine {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                })
                .map_err(db_err)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(db_err)?
        };

        let exercises = {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, description, dateAdded, dificulty_id,
                            image, machine_id, video
                     FROM exercises ORDER BY id",
                )
                .map_err(db_err)?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Exercise {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        date_added: row.get(3)?,
                        dificulty_id: row.get(4)?,
                        image: row.get(5)?,
                        machine_id: row.get(6)?,
                        video: row.get(7)?,
                    })
                })
                .map_err(db_err)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(db_err)?
        };

        Ok(OfflineCatalog {
            difficulties,
            machines,
            exercises,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn db_err(e: rusqlite::Error) -> AppError {
    AppError::Database(e.to_string())
}
