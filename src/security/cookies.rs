// ABOUTME: Session cookie utilities for request authentication
// ABOUTME: Sets, clears, and reads the httpOnly session cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

//! Session cookie helpers.
//!
//! The session token is carried in an httpOnly, SameSite=Lax cookie so
//! client-side scripts can never read it. The `Secure` flag follows the
//! `BASE_URL` environment variable: https deployments get it, plain-http
//! local development does not, and an unset variable fails secure.

use std::env;
use std::fmt::Write;

use axum::http::{header, HeaderMap, HeaderValue};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session_token";

/// Set the session cookie on a response
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str, max_age_secs: i64) {
    let mut cookie = format!("{SESSION_COOKIE}={token}");
    let _ = write!(cookie, "; Max-Age={max_age_secs}");
    cookie.push_str("; Path=/; HttpOnly; SameSite=Lax");
    if infer_secure_flag() {
        cookie.push_str("; Secure");
    }

    if let Ok(header_value) = HeaderValue::from_str(&cookie) {
        headers.insert(header::SET_COOKIE, header_value);
    }
}

/// Clear the session cookie on a response
pub fn clear_session_cookie(headers: &mut HeaderMap) {
    let mut cookie = format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax");
    if infer_secure_flag() {
        cookie.push_str("; Secure");
    }

    if let Ok(header_value) = HeaderValue::from_str(&cookie) {
        headers.insert(header::SET_COOKIE, header_value);
    }
}

/// Extract a cookie value from request headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            let name = parts.next()?.trim();
            let value = parts.next()?.trim();

            if name == cookie_name {
                Some(value.to_owned())
            } else {
                None
            }
        })
}

/// Derive the `Secure` cookie flag from the `BASE_URL` environment variable
fn infer_secure_flag() -> bool {
    env::var("BASE_URL").map_or(true, |url| url.starts_with("https://"))
}
