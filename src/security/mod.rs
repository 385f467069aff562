// ABOUTME: Security helper modules
// ABOUTME: Session cookie construction and extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CleberFit

/// Session cookie helpers
pub mod cookies;
