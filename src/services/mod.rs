// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - remote API access and token decoding.

pub mod auth;
pub mod token;

pub use auth::{AuthClient, AuthService, LoginOutcome, RegisterPayload, RegistrationOutcome};
pub use token::TokenClaims;
