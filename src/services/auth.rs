// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account signup and signin.
//!
//! Credentials are stored and compared in plaintext. Email uniqueness is a
//! check-then-insert against the store with no lock or transaction, so two
//! concurrent signups for the same email can both succeed.

use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::validation::{check_body, field_text};
use serde_json::Value;
use std::sync::Arc;

const SIGNUP_FIELDS: &[&str] = &["name", "email", "password"];
const SIGNIN_FIELDS: &[&str] = &["email", "password"];

/// Signup/signin workflow over an injected user store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new account from a `{name, email, password}` body.
    pub async fn signup(&self, body: &Value) -> Result<()> {
        if !check_body(body, SIGNUP_FIELDS) {
            return Err(AppError::MissingFields);
        }

        let name = field_text(body, "name");
        let email = field_text(body, "email");
        let password = field_text(body, "password");

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::debug!(email = %email, "Signup rejected, email already registered");
            return Err(AppError::UserAlreadyExists);
        }

        let user = self.store.create(&name, &email, &password).await?;
        tracing::info!(user_id = ?user.id, "User registered");
        Ok(())
    }

    /// Check a `{email, password}` body against stored accounts.
    ///
    /// Unknown email and wrong password both give `UserNotFound`.
    pub async fn signin(&self, body: &Value) -> Result<()> {
        if !check_body(body, SIGNIN_FIELDS) {
            return Err(AppError::MissingFields);
        }

        let email = field_text(body, "email");
        let password = field_text(body, "password");

        match self
            .store
            .find_by_email_and_password(&email, &password)
            .await?
        {
            Some(user) => {
                tracing::info!(user_id = ?user.id, "User signed in");
                Ok(())
            }
            None => Err(AppError::UserNotFound),
        }
    }
}
