//! Account commands.
//!
//! Accounts are keyed by normalized email (trimmed, lowercased). Passwords
//! are only ever stored hashed; see [`crate::auth`]. Login failures use one
//! error for both unknown email and wrong password.

use crate::auth::{hash_password, verify_password, PasswordHash};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentError, Result};
use crate::model::{Credentials, StoredUser};
use crate::store::DataStore;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

pub fn register<S: DataStore>(
    store: &mut S,
    credentials: &Credentials,
    iterations: u32,
) -> Result<CmdResult> {
    let email = normalize_email(&credentials.email);
    if email.is_empty() {
        return Err(RentError::InvalidInput("Email is required".to_string()));
    }
    if credentials.password.is_empty() {
        return Err(RentError::InvalidInput("Password is required".to_string()));
    }

    let mut users = store.load_users()?;
    if users.iter().any(|u| u.email == email) {
        return Err(RentError::UserExists);
    }

    let hashed = hash_password(&credentials.password, iterations);
    let user = StoredUser {
        id: Uuid::new_v4(),
        email,
        password_hash: hashed.hash,
        salt: hashed.salt,
        iterations: hashed.iterations,
        created_at: Utc::now(),
    };
    let record = user.record();
    users.push(user);
    store.save_users(&users)?;

    info!(user = %record.id, "account registered");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Registered {}", record.email)))
        .with_user(record))
}

pub fn login<S: DataStore>(store: &S, credentials: &Credentials) -> Result<CmdResult> {
    let email = normalize_email(&credentials.email);
    let users = store.load_users()?;
    let user = users
        .iter()
        .find(|u| u.email == email)
        .ok_or(RentError::InvalidCredentials)?;

    let stored = PasswordHash {
        hash: user.password_hash.clone(),
        salt: user.salt.clone(),
        iterations: user.iterations,
    };
    if !verify_password(&credentials.password, &stored) {
        return Err(RentError::InvalidCredentials);
    }

    let record = user.record();
    info!(user = %record.id, "logged in");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Welcome back, {}", record.email)))
        .with_user(record))
}

/// Sessions are not tracked, so there is nothing to tear down.
pub fn logout() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info("Logged out successfully")))
}

/// There is no session to inspect; callers are asked to authenticate again.
pub fn me() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::info("Please log in again")))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
