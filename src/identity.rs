// ABOUTME: Identity resolution mapping a session or email to a canonical user id
// ABOUTME: Single home for the session-or-email fallback used by every data endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Identity resolution.
//!
//! The front end may operate statefully (session cookie) or statelessly
//! (passing an email on every call). Both paths funnel through
//! [`IdentityResolver::resolve`], so downstream store operations only ever
//! see a canonical [`UserId`] and the fallback policy lives in exactly one
//! place.

use tracing::debug;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::UserId;

/// Resolves session identities and email fallbacks to canonical user ids
#[derive(Clone)]
pub struct IdentityResolver {
    database: Database,
}

impl IdentityResolver {
    /// Create a resolver over the given database handle
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }

    /// Resolve an identity from a session-derived id or an email fallback
    ///
    /// A present session identity wins unconditionally (it is already
    /// authenticated); otherwise the email is looked up. `None` means the
    /// identity could not be resolved: reads degrade to empty results,
    /// writes should use [`Self::resolve_required`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the email lookup itself fails; an unknown
    /// email resolves to `None`, not an error.
    pub async fn resolve(
        &self,
        session_identity: Option<UserId>,
        email: Option<&str>,
    ) -> AppResult<Option<UserId>> {
        if let Some(user_id) = session_identity {
            return Ok(Some(user_id));
        }

        match email {
            Some(email) if !email.is_empty() => {
                let resolved = self
                    .database
                    .get_user_by_email(email)
                    .await?
                    .map(|user| user.id);
                if resolved.is_none() {
                    debug!(email = %email, "identity fallback: no user for email");
                }
                Ok(resolved)
            }
            _ => Ok(None),
        }
    }

    /// Resolve an identity, failing with `NotFound` when it cannot be resolved
    ///
    /// Write operations require a resolved owner; this is the error-raising
    /// counterpart of [`Self::resolve`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if neither the session nor the email resolves to
    /// a user, or an error if the lookup fails.
    pub async fn resolve_required(
        &self,
        session_identity: Option<UserId>,
        email: Option<&str>,
    ) -> AppResult<UserId> {
        self.resolve(session_identity, email)
            .await?
            .ok_or_else(|| AppError::not_found("user"))
    }
}
