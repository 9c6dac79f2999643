// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod catalog;
pub mod user;

pub use catalog::{Difficulty, Exercise, Machine, OfflineCatalog};
pub use user::{Gender, UserRecord};
