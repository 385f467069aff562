// ABOUTME: Authentication capabilities: session store and password hashing
// ABOUTME: Opaque token-to-user session map with TTL plus bcrypt digest helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Session management and credential hashing.
//!
//! The session store is an opaque key-value capability: it maps random
//! session tokens to canonical user ids and knows nothing about HTTP. The
//! token travels in an httpOnly cookie (see [`crate::security::cookies`]).
//!
//! Password hashing wraps bcrypt behind two async helpers; hashing and
//! verification run on the blocking pool so they never stall the async
//! executor.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tokio::task;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::UserId;

/// One live session
#[derive(Debug, Clone, Copy)]
struct Session {
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

/// In-process session store keyed by opaque tokens
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a session store whose sessions live for `ttl_hours`
    #[must_use]
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Create a session for a user and return its opaque token
    #[must_use]
    pub fn create(&self, user_id: UserId) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                user_id,
                expires_at: Utc::now() + self.ttl,
            },
        );
        token
    }

    /// Resolve a token to its user id
    ///
    /// Expired sessions are removed lazily on lookup.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<UserId> {
        let expired = match self.sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => {
                return Some(session.user_id);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// Destroy a session; succeeds even if no such session exists
    pub fn destroy(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Session lifetime in seconds (drives the cookie Max-Age)
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

/// Hash a secret with bcrypt on the blocking pool
///
/// # Errors
///
/// Returns an error if the hashing task fails or bcrypt rejects the input
pub async fn hash_password(secret: &str) -> AppResult<String> {
    let secret = secret.to_owned();
    task::spawn_blocking(move || bcrypt::hash(&secret, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Verify a secret against a stored bcrypt digest on the blocking pool
///
/// A malformed digest verifies as `false` rather than erroring, so a
/// corrupted row reads as a failed login instead of a server error.
///
/// # Errors
///
/// Returns an error if the verification task fails
pub async fn verify_password(secret: &str, digest: &str) -> AppResult<bool> {
    let secret = secret.to_owned();
    let digest = digest.to_owned();
    let verified = task::spawn_blocking(move || bcrypt::verify(&secret, &digest))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
        .unwrap_or(false);

    Ok(verified)
}
